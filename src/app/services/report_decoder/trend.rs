//! Trend forecast decoding
//!
//! Decodes the content of one BECMG/TEMPO trend block. Each step removes
//! the substring it matched from the residual text before the next step
//! runs, so later steps never re-match already-consumed sub-groups. The
//! residual weather step excludes the structural keywords that survive
//! this consumption.

use super::patterns;
use super::weather::decode_weather;
use super::wind::decode_wind;
use crate::app::models::{
    CloudCover, CloudLayer, ConvectiveQualifier, TrendGroup, TrendKind, TrendTime,
};
use crate::constants::{TREND_STOPLIST, trend_time_word};

/// Decode one trend block into its rendered lines
///
/// The first line is the block header ("BECMG:"/"TEMPO:"); subsequent
/// lines cover whichever of time, wind, visibility, cloud and weather
/// sub-groups the block contains.
pub fn decode_trend(kind: TrendKind, content: &str) -> Vec<String> {
    render_trend(&parse_trend(kind, content))
}

/// Run the consuming scan over a trend block's content
pub fn parse_trend(kind: TrendKind, content: &str) -> TrendGroup {
    let mut group = TrendGroup::new(kind);
    let mut remaining = content.trim().to_string();

    // Time qualifier
    if let Some(captures) = patterns::TREND_TIME.captures(&remaining) {
        let qualifier = captures.get(1).map_or("", |m| m.as_str());
        let hhmm = captures.get(2).map_or("", |m| m.as_str());
        if let Some(word) = trend_time_word(qualifier)
            && hhmm.len() == 4
        {
            group.time = Some(TrendTime {
                qualifier: word,
                hour: hhmm[..2].to_string(),
                minute: hhmm[2..].to_string(),
            });
            let matched = captures.get(0).map_or("", |m| m.as_str()).to_string();
            remaining = remaining.replace(&matched, "").trim().to_string();
        }
    }

    // Wind
    if let Some(matched) = patterns::TREND_WIND.find(&remaining) {
        let code = matched.as_str().to_string();
        remaining = remaining.replace(&code, "").trim().to_string();
        group.wind = Some(code);
    }

    // Visibility: bare 4-digit group, else literal CAVOK
    let padded = format!(" {} ", remaining);
    if let Some(captures) = patterns::TREND_VISIBILITY.captures(&padded) {
        let digits = captures.get(1).map_or("", |m| m.as_str()).to_string();
        remaining = remaining.replace(&digits, "").trim().to_string();
        group.visibility = Some(digits);
    } else if remaining.contains("CAVOK") {
        remaining = remaining.replace("CAVOK", "").trim().to_string();
        group.visibility = Some("CAVOK".to_string());
    }

    // Cloud layers
    let cloud_matches: Vec<(String, CloudLayer)> = patterns::TREND_CLOUD
        .captures_iter(&remaining)
        .filter_map(|captures| {
            let cover = CloudCover::from_code(captures.get(1)?.as_str())?;
            let height: u32 = captures.get(2)?.as_str().parse().ok()?;
            let qualifier = captures
                .get(3)
                .and_then(|q| ConvectiveQualifier::from_code(q.as_str()));
            let matched = captures.get(0)?.as_str().to_string();
            Some((
                matched,
                CloudLayer {
                    cover,
                    height_hundreds_ft: height,
                    qualifier,
                },
            ))
        })
        .collect();
    for (matched, layer) in cloud_matches {
        remaining = remaining.replace(&matched, "").trim().to_string();
        group.clouds.push(layer);
    }

    // Residual weather tokens
    for captures in patterns::TREND_WEATHER.captures_iter(&remaining) {
        let prefix = captures.get(1).map_or("", |m| m.as_str());
        let code = captures.get(2).map_or("", |m| m.as_str());
        let full_code = format!("{}{}", prefix, code);
        if TREND_STOPLIST.contains(&full_code.as_str())
            || full_code.chars().all(|c| c.is_ascii_digit())
        {
            continue;
        }
        group.weather.push(decode_weather(&full_code));
    }

    group
}

/// Render a parsed trend group as its output lines
pub fn render_trend(group: &TrendGroup) -> Vec<String> {
    let mut lines = vec![format!("{}:", group.kind.code())];

    if let Some(time) = &group.time {
        lines.push(format!(
            "time: {} {}:{} UTC",
            time.qualifier, time.hour, time.minute
        ));
    }
    if let Some(wind) = &group.wind {
        lines.push(format!("wind: {}", decode_wind(wind, true)));
    }
    if let Some(visibility) = &group.visibility {
        if visibility == "CAVOK" {
            lines.push("visibility: CAVOK".to_string());
        } else {
            lines.push(format!("visibility: {} meters", visibility));
        }
    }
    if !group.clouds.is_empty() {
        let layers: Vec<String> = group.clouds.iter().map(super::clouds::render_layer).collect();
        lines.push(format!("cloud: {}", layers.join(", ")));
    }
    if !group.weather.is_empty() {
        lines.push(format!("weather: {}", group.weather.join(", ")));
    }

    lines
}
