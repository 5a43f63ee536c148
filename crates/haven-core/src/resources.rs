//! Crisis resource directory.
//!
//! Static reference data shown to the user when a message is flagged. The
//! classifier never picks a region; callers decide what to render.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownRegion;

/// Region key in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "Canada")]
    Canada,
    #[serde(rename = "Australia")]
    Australia,
    #[serde(rename = "international")]
    International,
}

impl Region {
    /// Returns all regions in directory order.
    pub fn all() -> &'static [Region] {
        &[
            Region::Us,
            Region::Uk,
            Region::Canada,
            Region::Australia,
            Region::International,
        ]
    }

    /// Returns the directory key for this region.
    pub fn key(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Uk => "UK",
            Region::Canada => "Canada",
            Region::Australia => "Australia",
            Region::International => "international",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::all()
            .iter()
            .copied()
            .find(|r| r.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// Contact details for one crisis line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
    pub description: &'static str,
}

static US: CrisisResource = CrisisResource {
    name: "988 Suicide & Crisis Lifeline",
    phone: Some("988"),
    text: Some("988"),
    url: Some("https://988lifeline.org"),
    description: "Free, confidential support 24/7 for people in distress",
};

static UK: CrisisResource = CrisisResource {
    name: "Samaritans",
    phone: Some("116 123"),
    text: None,
    url: Some("https://www.samaritans.org"),
    description: "Free support 24/7 for anyone struggling to cope",
};

static CANADA: CrisisResource = CrisisResource {
    name: "9-8-8 Suicide Crisis Helpline",
    phone: Some("988"),
    text: Some("988"),
    url: Some("https://988.ca"),
    description: "Bilingual suicide prevention support 24/7",
};

static AUSTRALIA: CrisisResource = CrisisResource {
    name: "Lifeline Australia",
    phone: Some("13 11 14"),
    text: Some("0477 13 11 14"),
    url: Some("https://www.lifeline.org.au"),
    description: "Crisis support and suicide prevention 24/7",
};

static INTERNATIONAL: CrisisResource = CrisisResource {
    name: "Find A Helpline",
    phone: None,
    text: None,
    url: Some("https://findahelpline.com"),
    description: "Directory of free, confidential helplines in over 130 countries",
};

/// Returns the crisis line for a region.
pub fn resource_for(region: Region) -> &'static CrisisResource {
    match region {
        Region::Us => &US,
        Region::Uk => &UK,
        Region::Canada => &CANADA,
        Region::Australia => &AUSTRALIA,
        Region::International => &INTERNATIONAL,
    }
}

/// Returns every entry in directory order.
pub fn all_resources() -> impl Iterator<Item = (Region, &'static CrisisResource)> {
    Region::all().iter().map(|&r| (r, resource_for(r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_a_contact() {
        for (region, resource) in all_resources() {
            assert!(!resource.name.is_empty(), "{region} has no name");
            assert!(
                resource.phone.is_some() || resource.text.is_some() || resource.url.is_some(),
                "{region} has no way to reach it"
            );
        }
        assert_eq!(all_resources().count(), 5);
    }

    #[test]
    fn region_parses_case_insensitively() {
        assert_eq!("US".parse::<Region>().unwrap(), Region::Us);
        assert_eq!("uk".parse::<Region>().unwrap(), Region::Uk);
        assert_eq!("International".parse::<Region>().unwrap(), Region::International);
        assert_eq!(
            "Mars".parse::<Region>().unwrap_err(),
            UnknownRegion("Mars".to_string())
        );
    }

    #[test]
    fn region_serializes_as_directory_key() {
        assert_eq!(serde_json::to_value(Region::Us).unwrap(), "US");
        assert_eq!(
            serde_json::to_value(Region::International).unwrap(),
            "international"
        );
        for region in Region::all() {
            assert_eq!(serde_json::to_value(region).unwrap(), region.key());
        }
    }

    #[test]
    fn absent_contact_fields_are_omitted() {
        let json = serde_json::to_value(resource_for(Region::International)).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("text").is_none());
        assert_eq!(json["url"], "https://findahelpline.com");
    }

    #[test]
    fn us_line_is_988() {
        assert_eq!(resource_for(Region::Us).phone, Some("988"));
    }
}
