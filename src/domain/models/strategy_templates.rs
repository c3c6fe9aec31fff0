//! Built-in strategy capabilities for car detailing businesses.
//!
//! Each capability is a [`CapabilitySpec`] entry. Adding a capability means
//! adding an entry here and listing it in [`builtin_capabilities`].

use crate::domain::models::capability::CapabilitySpec;
use crate::domain::models::params::{ParamKind, ParamSpec};
use crate::domain::models::profile::BusinessType;

const BUSINESS_TYPE: ParamKind = ParamKind::Choice(BusinessType::ALL);
const STAR_RATING: ParamKind = ParamKind::Decimal { min: 0.0, max: 5.0 };

pub const MARKETING_STRATEGY: CapabilitySpec = CapabilitySpec {
    name: "marketing_strategy",
    description: "Customized end-to-end marketing strategy for a detailing business",
    params: &[
        ParamSpec::new("business_name", ParamKind::Text, "Business name"),
        ParamSpec::new("business_type", BUSINESS_TYPE, "Kind of detailing business"),
        ParamSpec::new("service_area", ParamKind::Text, "Area the business serves"),
        ParamSpec::new("monthly_budget", ParamKind::Currency, "Monthly marketing budget"),
        ParamSpec::new("goals", ParamKind::TextList, "Business goals"),
    ],
    template: "{knowledge}

Please create a detailed, actionable marketing strategy for this car detailing business:

Business Name: {business_name}
Business Type: {business_type}
Service Area: {service_area}
Monthly Marketing Budget: ${monthly_budget}
Goals: {goals}

Provide:
1. Executive Summary
2. Target Audience Analysis
3. Recommended Marketing Channels (with expected ROI)
4. 90-Day Action Plan
5. Content Calendar (next 30 days)
6. Key Performance Indicators (KPIs)
7. Budget Allocation Strategy
8. Competitive Positioning",
    max_tokens: 2000,
};

pub const SOCIAL_MEDIA_CONTENT: CapabilitySpec = CapabilitySpec {
    name: "social_media_content",
    description: "Batch of ready-to-post social media content",
    params: &[
        ParamSpec::new("service_type", ParamKind::Text, "Service being promoted"),
        ParamSpec::new("num_posts", ParamKind::Count, "Number of posts").with_default("5"),
    ],
    template: "{knowledge}

Create {num_posts} engaging social media posts for a car detailing business promoting {service_type}.

For each post, provide:
- Platform (Instagram, TikTok, Facebook)
- Caption (with relevant hashtags)
- Recommended visuals/video idea
- Best posting time
- Engagement strategy

Make content viral-worthy and conversion-focused.",
    max_tokens: 1500,
};

pub const EMAIL_CAMPAIGN: CapabilitySpec = CapabilitySpec {
    name: "email_campaign",
    description: "Five-email marketing campaign for an audience segment",
    params: &[
        ParamSpec::new("audience_segment", ParamKind::Text, "Who receives the campaign"),
        ParamSpec::new("campaign_type", ParamKind::Text, "Campaign focus"),
    ],
    template: "{knowledge}

Create a 5-email marketing campaign for {audience_segment} focused on {campaign_type}.

Include:
1. Subject lines (A/B testing variants)
2. Email templates with copy
3. CTA strategies
4. Timing/frequency recommendations
5. Expected conversion rates
6. Personalization elements

Make it high-converting and value-focused.",
    max_tokens: 1800,
};

pub const COMPETITOR_ANALYSIS: CapabilitySpec = CapabilitySpec {
    name: "competitor_analysis",
    description: "Likely marketing strategy of a competitor and how to beat it",
    params: &[
        ParamSpec::new("competitor_name", ParamKind::Text, "Competitor business name"),
        ParamSpec::new("service_area", ParamKind::Text, "Competitor's service area"),
    ],
    template: "{knowledge}

Analyze the likely marketing strategy for a car detailing competitor:
Business: {competitor_name}
Service Area: {service_area}

Provide:
1. Estimated Marketing Channels
2. Likely Target Customer Profile
3. Probable Pricing Strategy
4. Competitive Advantages & Weaknesses
5. Differentiation Opportunities
6. Win-Back Strategies",
    max_tokens: 1200,
};

pub const REFERRAL_PROGRAM: CapabilitySpec = CapabilitySpec {
    name: "referral_program",
    description: "Referral program design",
    params: &[
        ParamSpec::new("business_type", BUSINESS_TYPE, "Kind of detailing business"),
        ParamSpec::new("service_level", ParamKind::Text, "Service tier, e.g. premium"),
    ],
    template: "{knowledge}

Design a high-performing referral program for a {business_type} car detailing business at {service_level} level.

Include:
1. Referral Incentive Structure
2. Program Rules & Terms
3. Marketing Materials Needed
4. Implementation Steps
5. Tracking Mechanisms
6. Expected Conversion Rates
7. Budget Requirements
8. Launch Strategy",
    max_tokens: 1400,
};

pub const PRICING_STRATEGY: CapabilitySpec = CapabilitySpec {
    name: "pricing_strategy",
    description: "Pricing and promotional strategy",
    params: &[
        ParamSpec::new("business_size", ParamKind::Text, "Business size, e.g. small"),
        ParamSpec::new("market_position", ParamKind::Text, "Positioning, e.g. premium"),
        ParamSpec::new("service_area", ParamKind::Text, "Market served"),
    ],
    template: "{knowledge}

Create a pricing and promotional strategy for a {business_size} car detailing business
positioned as {market_position} in the {service_area} market.

Provide:
1. Service Pricing Recommendations
2. Seasonal Promotions Calendar
3. Bundle Strategies
4. Dynamic Pricing Rules
5. Discount Strategy Framework
6. Psychological Pricing Tactics
7. Upsell Opportunities
8. Package Recommendations",
    max_tokens: 1400,
};

pub const LOCAL_SEO: CapabilitySpec = CapabilitySpec {
    name: "local_seo",
    description: "Local SEO strategy",
    params: &[
        ParamSpec::new("business_name", ParamKind::Text, "Business name"),
        ParamSpec::new("service_area", ParamKind::Text, "Area the business serves"),
        ParamSpec::new("google_rating", STAR_RATING, "Current Google rating"),
    ],
    template: "{knowledge}

Create a detailed local SEO strategy for a car detailing business:

Business Name: {business_name}
Service Area: {service_area}
Current Google Rating: {google_rating}/5.0

Include:
1. Google My Business Optimization Checklist
2. Local Keyword Strategy
3. Citation Building Plan
4. Review Generation System
5. Local Link Building
6. Schema Markup Implementation
7. Monthly Action Items
8. Expected Traffic Growth Timeline",
    max_tokens: 1600,
};

pub const VIDEO_MARKETING: CapabilitySpec = CapabilitySpec {
    name: "video_marketing",
    description: "Short-form video strategy for TikTok, YouTube Shorts and Reels",
    params: &[
        ParamSpec::new("business_type", BUSINESS_TYPE, "Kind of detailing business"),
        ParamSpec::new("monthly_budget", ParamKind::Currency, "Monthly video budget"),
    ],
    template: "{knowledge}

Create a viral video marketing strategy for a {business_type} car detailing business
with a ${monthly_budget} monthly video budget.

Provide:
1. Video Content Ideas (30 short videos)
2. Equipment & Production Requirements
3. Platform-Specific Strategies (TikTok, YouTube Shorts, Instagram Reels)
4. Hashtag & SEO Strategy for Videos
5. Monetization Opportunities
6. Team & Resource Requirements
7. Budget Breakdown
8. Expected Viral Metrics & KPIs
9. Editing & Publishing Workflow
10. Collaboration Opportunities",
    max_tokens: 2000,
};

pub const FLEET_MARKETING: CapabilitySpec = CapabilitySpec {
    name: "fleet_marketing",
    description: "B2B fleet customer acquisition strategy",
    params: &[
        ParamSpec::new("industry_targets", ParamKind::TextList, "Industries to target"),
        ParamSpec::new("service_area", ParamKind::Text, "Area the business serves"),
    ],
    template: "{knowledge}

Create a B2B fleet marketing strategy for car detailing targeting:
Industries: {industry_targets}
Service Area: {service_area}

Include:
1. Fleet Manager Buyer Personas
2. Target Company List & Criteria
3. Cold Outreach Email Sequences
4. ROI Case Studies & Proposals
5. Fleet Contract Templates
6. Volume Pricing Strategy
7. Account Management Plans
8. Partnership Opportunities
9. Implementation Timeline
10. Expected Close Rates & Deal Size",
    max_tokens: 1800,
};

pub const INFLUENCER_PARTNERSHIP: CapabilitySpec = CapabilitySpec {
    name: "influencer_partnership",
    description: "Influencer marketing partnership plan",
    params: &[
        ParamSpec::new("niche", ParamKind::Text, "Influencer niche"),
        ParamSpec::new("region", ParamKind::Text, "Target region"),
        ParamSpec::new("budget", ParamKind::Currency, "Partnership budget"),
    ],
    template: "{knowledge}

Create an influencer partnership strategy for a car detailing business:
Niche: {niche}
Region: {region}
Partnership Budget: ${budget}

Include:
1. Influencer Tier Strategy (Macro, Micro, Nano)
2. Ideal Influencer Profiles & Niches
3. Finding & Vetting Process
4. Outreach Email Templates
5. Partnership Deal Structures
6. Content Requirements & Guidelines
7. Performance Metrics & Tracking
8. Budget Allocation
9. Contract Template Elements
10. Long-term Relationship Building",
    max_tokens: 1600,
};

pub const CRISIS_MANAGEMENT: CapabilitySpec = CapabilitySpec {
    name: "crisis_management",
    description: "Crisis communication and reputation protection plan",
    params: &[ParamSpec::new("business_name", ParamKind::Text, "Business name")],
    template: "{knowledge}

Create a crisis management and reputation protection plan for {business_name}.

Include:
1. Potential Crisis Scenarios
2. Response Templates for Each Scenario
3. Media Response Procedures
4. Social Media Crisis Protocol
5. Review Management Strategy
6. Legal Coordination Guidelines
7. Customer Communication Templates
8. Team Communication Plan
9. Prevention Strategies
10. Recovery & Rebuilding Strategy",
    max_tokens: 1500,
};

pub const PARTNERSHIP_STRATEGY: CapabilitySpec = CapabilitySpec {
    name: "partnership_strategy",
    description: "Strategic local partnership plan",
    params: &[
        ParamSpec::new("potential_partners", ParamKind::TextList, "Candidate partners"),
        ParamSpec::new("service_area", ParamKind::Text, "Area the business serves"),
    ],
    template: "{knowledge}

Create a strategic partnership strategy for a car detailing business in {service_area}.
Potential Partners: {potential_partners}

Include:
1. Partner Evaluation Criteria
2. Partnership Models (Revenue Share, Referral, Co-Marketing)
3. Outreach & Pitch Templates
4. Mutual Benefit Analysis for Each Partner
5. Contract Framework
6. Co-Marketing Campaign Ideas
7. Integration & Operational Plans
8. Performance Metrics
9. Long-term Relationship Building
10. Scaling Partnership Model",
    max_tokens: 1700,
};

pub const RETENTION_MARKETING: CapabilitySpec = CapabilitySpec {
    name: "retention_marketing",
    description: "Customer retention and lifetime value strategy",
    params: &[
        ParamSpec::new(
            "average_customer_lifetime",
            ParamKind::Count,
            "Average customer lifetime in months",
        ),
        ParamSpec::new("repeat_rate", ParamKind::Ratio, "Current repeat purchase rate"),
    ],
    template: "{knowledge}

Create a comprehensive customer retention strategy for a car detailing business:
Average Customer Lifetime (months): {average_customer_lifetime}
Current Repeat Purchase Rate: {repeat_rate:percent}%

Include:
1. Customer Lifecycle Mapping
2. Retention Marketing Funnel
3. Win-Back Campaigns for Inactive Customers
4. Loyalty Program Design
5. Subscription Model Options
6. VIP/Premium Tier Strategy
7. Personalized Communication Plan
8. Customer Satisfaction Surveys
9. NPS Improvement Strategies
10. Lifetime Value Projections",
    max_tokens: 1600,
};

/// Every built-in capability, in catalog order.
pub fn builtin_capabilities() -> Vec<CapabilitySpec> {
    vec![
        MARKETING_STRATEGY,
        SOCIAL_MEDIA_CONTENT,
        EMAIL_CAMPAIGN,
        COMPETITOR_ANALYSIS,
        REFERRAL_PROGRAM,
        PRICING_STRATEGY,
        LOCAL_SEO,
        VIDEO_MARKETING,
        FLEET_MARKETING,
        INFLUENCER_PARTNERSHIP,
        CRISIS_MANAGEMENT,
        PARTNERSHIP_STRATEGY,
        RETENTION_MARKETING,
    ]
}
