use serde::Deserialize;

/// Duration parsed from humanized strings like `"30s"`, `"5m"` or `"1h 30m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s)
            .map(|secs| Duration(std::time::Duration::from_secs(secs)))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid duration: {s:?}")))
    }
}

fn parse(s: &str) -> Option<u64> {
    let mut total = None;
    for part in s.split_whitespace() {
        let unit = part.chars().last()?;
        let value = part.strip_suffix(unit)?.parse::<u64>().ok()?;
        let seconds = match unit {
            's' => value,
            'm' => value * 60,
            'h' => value * 3600,
            'd' => value * 86400,
            _ => return None,
        };
        total = Some(total.unwrap_or(0) + seconds);
    }
    total
}
