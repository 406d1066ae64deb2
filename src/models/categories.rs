use crate::error::{DashboardError, Result};

/// Season category codes as used in the source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            _ => Err(DashboardError::UnknownSeasonCode(code)),
        }
    }

    pub fn as_code(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Weather situation category codes as used in the source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    Clear = 1,
    Misty = 2,
    LightPrecipitation = 3,
    HeavyPrecipitation = 4,
}

impl WeatherKind {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(WeatherKind::Clear),
            2 => Ok(WeatherKind::Misty),
            3 => Ok(WeatherKind::LightPrecipitation),
            4 => Ok(WeatherKind::HeavyPrecipitation),
            _ => Err(DashboardError::UnknownWeatherCode(code)),
        }
    }

    pub fn as_code(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear, Few clouds, Partly cloudy",
            WeatherKind::Misty => "Mist, Cloudy, Broken clouds",
            WeatherKind::LightPrecipitation => "Light Snow, Light Rain, Thunderstorm",
            WeatherKind::HeavyPrecipitation => "Heavy Rain, Snow, Fog",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_season_code_conversion() {
        assert_eq!(Season::from_code(1).unwrap(), Season::Spring);
        assert_eq!(Season::from_code(2).unwrap(), Season::Summer);
        assert_eq!(Season::from_code(3).unwrap(), Season::Fall);
        assert_eq!(Season::from_code(4).unwrap(), Season::Winter);
        assert!(Season::from_code(0).is_err());
        assert!(Season::from_code(5).is_err());
    }

    #[test]
    fn test_weather_code_conversion() {
        assert_eq!(WeatherKind::from_code(1).unwrap(), WeatherKind::Clear);
        assert_eq!(
            WeatherKind::from_code(4).unwrap(),
            WeatherKind::HeavyPrecipitation
        );
        assert!(WeatherKind::from_code(0).is_err());
        assert!(WeatherKind::from_code(9).is_err());
    }

    #[test]
    fn test_labels_are_distinct() {
        let season_labels: HashSet<_> = (1..=4)
            .map(|c| Season::from_code(c).unwrap().label())
            .collect();
        assert_eq!(season_labels.len(), 4);

        let weather_labels: HashSet<_> = (1..=4)
            .map(|c| WeatherKind::from_code(c).unwrap().label())
            .collect();
        assert_eq!(weather_labels.len(), 4);
    }

    #[test]
    fn test_code_round_trip() {
        for code in 1..=4u8 {
            assert_eq!(Season::from_code(code).unwrap().as_code(), code);
            assert_eq!(WeatherKind::from_code(code).unwrap().as_code(), code);
        }
    }
}
