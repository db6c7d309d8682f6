//! Condition→backdrop lookup.
//!
//! A fixed table from provider condition keywords to full-bleed background
//! image URLs. Pure data, deliberately kept out of the stateful view logic;
//! anything the table does not know falls back to the clear-sky image.

/// A backdrop image keyed to a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    /// Condition keyword this backdrop represents, e.g. "Rain".
    pub condition: &'static str,
    pub url: &'static str,
}

const CLEAR: Backdrop = Backdrop {
    condition: "Clear",
    url: "https://images.pexels.com/photos/281260/pexels-photo-281260.jpeg",
};

/// Backdrop used before any weather is loaded and for unknown conditions.
pub const DEFAULT_BACKDROP: Backdrop = CLEAR;

const BACKDROPS: &[Backdrop] = &[
    Backdrop {
        condition: "Clouds",
        url: "https://www.clearias.com/up/Clouds.jpg",
    },
    Backdrop {
        condition: "Rain",
        url: "https://www.skymetweather.com/content/wp-content/uploads/2022/06/Rain-in-Northeast-India-FB-3.jpg",
    },
    Backdrop {
        condition: "Thunderstorm",
        url: "https://miro.medium.com/v2/resize:fit:640/format:webp/0*xXXO-QwJzR0la75A.jpg",
    },
    Backdrop {
        condition: "Drizzle",
        url: "https://www.metoffice.gov.uk/binaries/content/gallery/metofficegovuk/hero-images/weather/rain/raindrops-misted-on-a-windscreen.jpg",
    },
    Backdrop {
        condition: "Snow",
        url: "https://cdn.britannica.com/79/149179-050-DC23D823/snowflake-threads-wool-coat.jpg",
    },
    CLEAR,
    Backdrop {
        condition: "Haze",
        url: "https://cff2.earth.com/uploads/2018/11/13015448/what-is-haze.jpg",
    },
    Backdrop {
        condition: "Smoke",
        url: "https://1.bp.blogspot.com/-T4Wu8ctCPo0/X1uyv0PRN8I/AAAAAAAA9xQ/fq7_QYyw6KsO4Yndbb1FIn7uAKVfQaO0wCLcBGAsYHQ/s1600/Screen%2BShot%2B2020-09-11%2Bat%2B9.16.03%2BAM.png",
    },
    Backdrop {
        condition: "Mist",
        url: "https://img.freepik.com/premium-photo/high-fog-mountains-limited-visibility-bad-weather-conditions-driver_105751-14393.jpg",
    },
    Backdrop {
        condition: "Fog",
        url: "https://zameenblog.s3.amazonaws.com/blog/wp-content/uploads/2019/12/cover-image-3-2.jpg",
    },
];

/// Look up the backdrop for a condition keyword.
///
/// Matching is exact (provider keywords are capitalized, e.g. "Rain");
/// unknown keywords resolve to [`DEFAULT_BACKDROP`].
pub fn backdrop_for(condition: &str) -> Backdrop {
    BACKDROPS
        .iter()
        .copied()
        .find(|b| b.condition == condition)
        .unwrap_or(DEFAULT_BACKDROP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_maps_to_rain_image() {
        let b = backdrop_for("Rain");
        assert_eq!(b.condition, "Rain");
        assert!(b.url.contains("Rain-in-Northeast-India"));
    }

    #[test]
    fn unknown_condition_falls_back_to_clear() {
        assert_eq!(backdrop_for("Tornado"), DEFAULT_BACKDROP);
        assert_eq!(backdrop_for(""), DEFAULT_BACKDROP);
    }

    #[test]
    fn lookup_is_case_sensitive_like_the_provider_keywords() {
        // Provider sends "Rain", never "rain"; lowercase is unknown.
        assert_eq!(backdrop_for("rain"), DEFAULT_BACKDROP);
    }

    #[test]
    fn every_table_entry_resolves_to_itself() {
        for b in BACKDROPS {
            assert_eq!(backdrop_for(b.condition), *b);
        }
    }
}
