//! Business profile of a detailing company.
//!
//! Profiles are parameter sources only: [`AgentConfiguration::parameters`]
//! flattens one into a [`ParameterSet`] and the core never looks at it again.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::models::params::ParameterSet;

/// Kind of detailing business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Independent,
    Franchise,
    Dealership,
}

impl BusinessType {
    pub const ALL: &'static [&'static str] = &["independent", "franchise", "dealership"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Franchise => "franchise",
            Self::Dealership => "dealership",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channels the business is willing to market through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingChannels {
    #[serde(default = "default_social_media")]
    pub social_media: Vec<String>,
    #[serde(default = "default_true")]
    pub email: bool,
    #[serde(default = "default_true")]
    pub local_seo: bool,
    #[serde(default = "default_true")]
    pub paid_ads: bool,
    #[serde(default = "default_true")]
    pub content_marketing: bool,
    #[serde(default = "default_true")]
    pub partnerships: bool,
    #[serde(default = "default_true")]
    pub referral: bool,
    #[serde(default = "default_true")]
    pub video: bool,
}

fn default_social_media() -> Vec<String> {
    strings(&["Instagram", "TikTok", "Facebook", "YouTube"])
}

const fn default_true() -> bool {
    true
}

impl Default for MarketingChannels {
    fn default() -> Self {
        Self {
            social_media: default_social_media(),
            email: true,
            local_seo: true,
            paid_ads: true,
            content_marketing: true,
            partnerships: true,
            referral: true,
            video: true,
        }
    }
}

impl MarketingChannels {
    /// Names of the enabled channels, social platforms first.
    pub fn enabled(&self) -> Vec<String> {
        let flags = [
            (self.email, "Email"),
            (self.local_seo, "Local SEO"),
            (self.paid_ads, "Paid Ads"),
            (self.content_marketing, "Content Marketing"),
            (self.partnerships, "Partnerships"),
            (self.referral, "Referral"),
            (self.video, "Video"),
        ];
        self.social_media
            .iter()
            .cloned()
            .chain(
                flags
                    .into_iter()
                    .filter(|(on, _)| *on)
                    .map(|(_, name)| name.to_string()),
            )
            .collect()
    }
}

/// Current business performance numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    pub monthly_revenue: f64,
    pub average_customer_value: f64,
    pub repeat_customer_rate: f64,
    pub google_rating: f64,
    pub review_count: u32,
    pub current_customer_base: u32,
    pub monthly_inquiries: u32,
    pub conversion_rate: f64,
}

/// Profile of the business strategies are generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfiguration {
    pub business_name: String,
    pub business_type: BusinessType,
    pub service_area: String,
    pub monthly_budget: f64,
    #[serde(default)]
    pub channels: MarketingChannels,
    #[serde(default)]
    pub metrics: Option<BusinessMetrics>,
    #[serde(default = "default_goals")]
    pub goals: Vec<String>,
    #[serde(default)]
    pub unique_selling_points: Vec<String>,
    #[serde(default = "default_demographics")]
    pub target_demographics: Vec<String>,
}

fn default_goals() -> Vec<String> {
    strings(&["Increase leads", "Build brand awareness"])
}

fn default_demographics() -> Vec<String> {
    strings(&["Vehicle owners aged 25-55"])
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl AgentConfiguration {
    /// Profile with the default goals, channels and demographics.
    pub fn new(
        business_name: impl Into<String>,
        business_type: BusinessType,
        service_area: impl Into<String>,
        monthly_budget: f64,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            business_type,
            service_area: service_area.into(),
            monthly_budget,
            channels: MarketingChannels::default(),
            metrics: None,
            goals: default_goals(),
            unique_selling_points: Vec::new(),
            target_demographics: default_demographics(),
        }
    }

    /// Flatten the profile into capability parameters.
    ///
    /// Keys follow the parameter names used by the capability catalog, so any
    /// capability can pick out what it declares.
    pub fn parameters(&self) -> ParameterSet {
        let mut params = ParameterSet::new()
            .with("business_name", self.business_name.as_str())
            .with("business_type", self.business_type.as_str())
            .with("service_area", self.service_area.as_str())
            .with("region", self.service_area.as_str())
            .with("monthly_budget", self.monthly_budget)
            .with("goals", self.goals.clone());

        if let Some(metrics) = &self.metrics {
            params.insert("google_rating", metrics.google_rating);
            params.insert("repeat_rate", metrics.repeat_customer_rate);
        }
        params
    }

    /// Look up one of the built-in example profiles by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "independent" => Some(Self::independent_detailer()),
            "franchise" => Some(Self::franchise_detailer()),
            "dealership" => Some(Self::dealership_partner()),
            _ => None,
        }
    }

    pub const PRESETS: &'static [&'static str] = &["independent", "franchise", "dealership"];

    pub fn independent_detailer() -> Self {
        Self {
            business_name: "Independent Detailer".to_string(),
            business_type: BusinessType::Independent,
            service_area: "Local City".to_string(),
            monthly_budget: 2000.0,
            channels: MarketingChannels {
                social_media: strings(&["Instagram", "TikTok", "Facebook"]),
                paid_ads: false,
                ..MarketingChannels::default()
            },
            metrics: None,
            goals: strings(&[
                "Increase leads by 40%",
                "Build brand awareness",
                "Develop corporate clients",
            ]),
            unique_selling_points: strings(&["Premium ceramic coatings", "Eco-friendly products"]),
            target_demographics: strings(&["Vehicle owners aged 30-55", "Small business owners"]),
        }
    }

    pub fn franchise_detailer() -> Self {
        Self {
            business_name: "Franchise Detailer".to_string(),
            business_type: BusinessType::Franchise,
            service_area: "Regional".to_string(),
            monthly_budget: 5000.0,
            channels: MarketingChannels::default(),
            metrics: None,
            goals: strings(&[
                "Expand locations",
                "Increase customer base",
                "Build regional brand",
            ]),
            unique_selling_points: strings(&[
                "Consistent quality across locations",
                "Warranty programs",
            ]),
            target_demographics: strings(&["Fleet owners", "Corporate clients", "Dealerships"]),
        }
    }

    pub fn dealership_partner() -> Self {
        Self {
            business_name: "Dealership Partner".to_string(),
            business_type: BusinessType::Dealership,
            service_area: "Local Area".to_string(),
            monthly_budget: 3000.0,
            channels: MarketingChannels {
                social_media: strings(&["Instagram", "Facebook"]),
                content_marketing: false,
                video: false,
                ..MarketingChannels::default()
            },
            metrics: None,
            goals: strings(&[
                "Increase customer retention",
                "Upsell services",
                "Improve dealership ratings",
            ]),
            unique_selling_points: strings(&["Factory-approved products", "Warranty coverage"]),
            target_demographics: strings(&["New car buyers", "Service customers", "Fleet services"]),
        }
    }
}
