use roadgraph_core::bail_invalid;
use roadgraph_core::error::Result;
use roadgraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a road written as `A-B` into a pair of city ids
pub fn parse_road_pair(s: &str) -> Result<(u32, u32)> {
    let Some((a, b)) = s.split_once('-') else {
        bail_invalid!("road", s);
    };
    match (a.trim().parse::<u32>(), b.trim().parse::<u32>()) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => bail_invalid!("road", s),
    }
}

/// Clap value parser for `--road`
pub fn parse_road(s: &str) -> std::result::Result<(u32, u32), String> {
    parse_road_pair(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_road() {
        assert_eq!(parse_road("1-2").unwrap(), (1, 2));
        assert_eq!(parse_road(" 10 - 3 ").unwrap(), (10, 3));
    }

    #[test]
    fn test_parse_road_errors() {
        assert_eq!(parse_road("1").unwrap_err(), "invalid road: 1");
        assert!(parse_road("a-b").is_err());
        assert!(parse_road("1-2-3").is_err());
        assert!(parse_road("-1-2").is_err());
    }
}
