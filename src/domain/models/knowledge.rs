//! Domain knowledge preamble shared by every capability.

use std::sync::Arc;

const DETAILING_MARKETING_KNOWLEDGE: &str = r"# Car Detailing Marketing Expertise

## Industry Knowledge:
- Average car detailing service: $50-$300
- Peak seasons: Spring/Summer (outdoor events, weddings)
- Target demographics: Vehicle owners, fleet managers, dealerships
- Key service offerings: Paint protection, ceramic coating, interior detailing, fleet services

## Proven Marketing Strategies:
1. **Local SEO**: Google My Business optimization, local directories
2. **Before/After Content**: Showcase transformations on social media
3. **Referral Programs**: Incentivize existing customers for referrals
4. **Fleet Marketing**: Target commercial vehicle operators
5. **Partnership Marketing**: Work with car dealerships and auto shops
6. **Seasonal Campaigns**: Holiday specials, spring cleaning, winter protection
7. **Loyalty Programs**: Monthly subscriptions, membership rewards
8. **Video Content**: TikTok/Reels with quick detailing transformations

## Cost-Effective Channels:
- Instagram/TikTok (organic content)
- Google Local Services Ads
- Facebook Community Groups
- Local partnerships
- Email marketing
- Referral systems";

/// Immutable block of domain expertise prepended to every request.
///
/// Cloning is cheap; all clones share the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    text: Arc<str>,
}

impl KnowledgeBase {
    /// The car detailing marketing knowledge the agent ships with.
    pub fn detailing() -> Self {
        Self {
            text: Arc::from(DETAILING_MARKETING_KNOWLEDGE),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::detailing()
    }
}
