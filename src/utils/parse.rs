use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a usage quantity, rejecting negative values
pub fn parse_usage(input: &str) -> Result<Decimal, String> {
    let value = Decimal::from_str(input.trim())
        .map_err(|_| format!("invalid usage '{}': expected a number", input))?;

    if value < Decimal::ZERO {
        return Err(format!("invalid usage '{}': must not be negative", input));
    }

    Ok(value)
}

/// Parse `resource=usage`, e.g. `vm=24.5`
pub fn parse_usage_pair(input: &str) -> Result<(String, Decimal), String> {
    let (id, usage) = input
        .split_once('=')
        .ok_or_else(|| format!("invalid item '{}': expected RESOURCE=USAGE", input))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("invalid item '{}': missing resource id", input));
    }

    Ok((id.to_string(), parse_usage(usage)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_usage() {
        assert_eq!(parse_usage("24.5"), Ok(dec!(24.5)));
        assert_eq!(parse_usage(" 0 "), Ok(Decimal::ZERO));
        assert!(parse_usage("-5").unwrap_err().contains("negative"));
        assert!(parse_usage("abc").unwrap_err().contains("expected a number"));
    }

    #[test]
    fn test_parse_usage_pair() {
        assert_eq!(
            parse_usage_pair("vm=24.5"),
            Ok(("vm".to_string(), dec!(24.5)))
        );
        assert_eq!(
            parse_usage_pair(" storage = 100 "),
            Ok(("storage".to_string(), dec!(100)))
        );
        assert!(parse_usage_pair("vm").is_err());
        assert!(parse_usage_pair("=3").is_err());
        assert!(parse_usage_pair("vm=-1").is_err());
    }
}
