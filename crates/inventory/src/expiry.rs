use foodwise_shared::FoodItem;
use time::OffsetDateTime;
use uuid::Uuid;

const SECONDS_PER_DAY: i64 = 86_400;

/// How many whole days remain before `expiry`, rounded up so a partial day
/// counts in the item's favor. Negative once the expiry instant has passed
/// by a full day boundary.
pub fn days_until_expiry(expiry: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let secs = (expiry - now).whole_seconds();
    secs.div_euclid(SECONDS_PER_DAY)
        + if secs.rem_euclid(SECONDS_PER_DAY) > 0 {
            1
        } else {
            0
        }
}

/// Derived per-item status. Never stored on the item; recomputed from the
/// caller-supplied instant on every classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Fresh,
    Warning,
    Expired,
}

pub fn status_of(days_until_expiry: i64) -> ExpiryStatus {
    if days_until_expiry < 0 {
        ExpiryStatus::Expired
    } else if days_until_expiry < 3 {
        ExpiryStatus::Warning
    } else {
        ExpiryStatus::Fresh
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryCounts {
    pub total: usize,
    pub warning: usize,
    pub expired: usize,
}

/// Result of bucketing an inventory by expiry status. Items keep their
/// input order within each bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub fresh: Vec<FoodItem>,
    pub warning: Vec<FoodItem>,
    pub expired: Vec<FoodItem>,
    pub counts: InventoryCounts,
}

/// Bucket `items` by expiry status against `now`. Pure: identical inputs
/// yield identical output, including item order.
pub fn classify(items: &[FoodItem], now: OffsetDateTime) -> Classification {
    let mut fresh = Vec::new();
    let mut warning = Vec::new();
    let mut expired = Vec::new();

    for item in items {
        match status_of(days_until_expiry(item.expiry, now)) {
            ExpiryStatus::Fresh => fresh.push(item.clone()),
            ExpiryStatus::Warning => warning.push(item.clone()),
            ExpiryStatus::Expired => expired.push(item.clone()),
        }
    }

    let counts = InventoryCounts {
        total: items.len(),
        warning: warning.len(),
        expired: expired.len(),
    };

    Classification {
        fresh,
        warning,
        expired,
        counts,
    }
}

/// One line of the expiry-warning panel.
#[derive(Debug, Clone, PartialEq)]
pub struct WarningEntry {
    pub id: Uuid,
    pub name: String,
    pub days_left: i64,
}

/// Items inside the warning window, soonest first. The sort is stable so
/// equal `days_left` entries keep their input order.
pub fn warning_schedule(items: &[FoodItem], now: OffsetDateTime) -> Vec<WarningEntry> {
    let mut entries: Vec<WarningEntry> = items
        .iter()
        .filter_map(|item| {
            let days_left = days_until_expiry(item.expiry, now);
            match status_of(days_left) {
                ExpiryStatus::Warning => Some(WarningEntry {
                    id: item.id,
                    name: item.name.clone(),
                    days_left,
                }),
                _ => None,
            }
        })
        .collect();
    entries.sort_by_key(|entry| entry.days_left);
    entries
}

pub fn days_left_label(days_left: i64) -> String {
    match days_left {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("{n} days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodwise_shared::FoodCategory;
    use time::macros::datetime;
    use time::Duration;

    const NOW: OffsetDateTime = datetime!(2026-08-24 00:00 UTC);

    fn item(name: &str, expiry: OffsetDateTime) -> FoodItem {
        FoodItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: FoodCategory::Other,
            expiry,
            quantity: 1.0,
            unit: "pcs".to_string(),
        }
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(days_until_expiry(NOW + Duration::seconds(1), NOW), 1);
        assert_eq!(days_until_expiry(NOW + Duration::days(1), NOW), 1);
        assert_eq!(
            days_until_expiry(NOW + Duration::days(1) + Duration::seconds(1), NOW),
            2
        );
    }

    #[test]
    fn expired_means_negative_days() {
        assert_eq!(days_until_expiry(NOW - Duration::days(1), NOW), -1);
        assert_eq!(status_of(-1), ExpiryStatus::Expired);
        // A partial day behind still rounds toward zero, not expired.
        assert_eq!(days_until_expiry(NOW - Duration::seconds(1), NOW), 0);
    }

    #[test]
    fn warning_window_is_closed_open() {
        assert_eq!(status_of(0), ExpiryStatus::Warning);
        assert_eq!(status_of(1), ExpiryStatus::Warning);
        assert_eq!(status_of(2), ExpiryStatus::Warning);
        assert_eq!(status_of(3), ExpiryStatus::Fresh);
    }

    #[test]
    fn day_granular_expiry_three_days_out_is_warning() {
        // "now + 3 days minus 1 second" truncated to its day boundary.
        let expiry = (NOW + Duration::days(3) - Duration::seconds(1))
            .replace_time(time::Time::MIDNIGHT);
        let days = days_until_expiry(expiry, NOW);
        assert_eq!(days, 2);
        assert_eq!(status_of(days), ExpiryStatus::Warning);
    }

    #[test]
    fn classify_buckets_and_counts() {
        let items = vec![
            item("Milk", NOW + Duration::days(2)),
            item("Chicken", NOW + Duration::days(1)),
            item("Apples", NOW + Duration::days(5)),
            item("Bread", NOW - Duration::days(1)),
        ];
        let result = classify(&items, NOW);
        assert_eq!(result.counts.total, 4);
        assert_eq!(result.counts.warning, 2);
        assert_eq!(result.counts.expired, 1);
        assert_eq!(result.fresh.len(), 1);
        assert_eq!(result.fresh[0].name, "Apples");
        // Input order survives inside buckets.
        assert_eq!(result.warning[0].name, "Milk");
        assert_eq!(result.warning[1].name, "Chicken");
    }

    #[test]
    fn classify_is_pure() {
        let items = vec![
            item("Milk", NOW + Duration::days(2)),
            item("Bread", NOW - Duration::days(1)),
        ];
        assert_eq!(classify(&items, NOW), classify(&items, NOW));
    }

    #[test]
    fn warning_schedule_sorts_soonest_first_and_is_stable() {
        let items = vec![
            item("Milk", NOW + Duration::days(2)),
            item("Chicken", NOW + Duration::days(1)),
            item("Yogurt", NOW + Duration::days(2)),
            item("Paneer", NOW),
            item("Apples", NOW + Duration::days(5)),
        ];
        let schedule = warning_schedule(&items, NOW);
        let names: Vec<&str> = schedule.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Paneer", "Chicken", "Milk", "Yogurt"]);
        assert_eq!(schedule[0].days_left, 0);
    }

    #[test]
    fn labels() {
        assert_eq!(days_left_label(0), "Today");
        assert_eq!(days_left_label(1), "Tomorrow");
        assert_eq!(days_left_label(2), "2 days");
    }
}
