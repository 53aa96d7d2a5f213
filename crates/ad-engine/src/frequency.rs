//! Session-scoped impression ledger honoring per-creative `show_once` and
//! `frequency_mins` hints.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use storefront_core::types::Creative;

#[derive(Debug, Clone)]
struct ImpressionRecord {
    count: u32,
    last_shown: DateTime<Utc>,
}

/// Tracks which creatives have been displayed this session and when. The
/// selector consults it to filter eligible pools before a draw and records
/// every win against it. State lives for one session only.
#[derive(Debug)]
pub struct FrequencyLedger {
    session_id: Uuid,
    impressions: DashMap<String, ImpressionRecord>,
}

impl FrequencyLedger {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            impressions: DashMap::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Whether the creative may be shown again right now.
    pub fn eligible(&self, creative: &Creative) -> bool {
        match self.impressions.get(&creative.id) {
            None => true,
            Some(record) => {
                if creative.show_once && record.count > 0 {
                    return false;
                }
                if let Some(mins) = creative.frequency_mins {
                    if Utc::now() - record.last_shown < Duration::minutes(mins as i64) {
                        return false;
                    }
                }
                true
            }
        }
    }

    pub fn record(&self, creative: &Creative) {
        let now = Utc::now();
        self.impressions
            .entry(creative.id.clone())
            .and_modify(|record| {
                record.count += 1;
                record.last_shown = now;
            })
            .or_insert(ImpressionRecord {
                count: 1,
                last_shown: now,
            });
    }

    /// Impressions recorded for a creative this session.
    pub fn impressions(&self, creative_id: &str) -> u32 {
        self.impressions
            .get(creative_id)
            .map(|record| record.count)
            .unwrap_or(0)
    }
}

impl Default for FrequencyLedger {
    fn default() -> Self {
        Self::new()
    }
}
