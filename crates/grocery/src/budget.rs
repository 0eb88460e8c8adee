use time::{Duration, OffsetDateTime, Time};

const TOP_CATEGORIES: usize = 5;
const RECENT_EXPENSES: usize = 5;

/// A grocery purchase recorded against the weekly budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub name: String,
    pub category: String,
    pub amount: f64,
    pub date: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub total_spent: f64,
    /// Negative when over budget.
    pub remaining: f64,
    /// Up to five categories, largest spend first.
    pub by_category: Vec<(String, f64)>,
    /// Up to five expenses of the week, in input order.
    pub recent: Vec<Expense>,
}

/// Summarize spending for the Sunday-through-Saturday week containing
/// `now`. Expenses outside that week are ignored.
pub fn weekly_summary(expenses: &[Expense], weekly_budget: f64, now: OffsetDateTime) -> WeeklySummary {
    let days_into_week = i64::from(now.weekday().number_days_from_sunday());
    let week_start = (now - Duration::days(days_into_week)).replace_time(Time::MIDNIGHT);
    let week_end = week_start + Duration::days(7);

    let weekly: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| expense.date >= week_start && expense.date < week_end)
        .collect();

    let total_spent: f64 = weekly.iter().map(|expense| expense.amount).sum();

    let mut by_category: Vec<(String, f64)> = Vec::new();
    for expense in &weekly {
        match by_category
            .iter_mut()
            .find(|(category, _)| *category == expense.category)
        {
            Some((_, amount)) => *amount += expense.amount,
            None => by_category.push((expense.category.clone(), expense.amount)),
        }
    }
    by_category.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    by_category.truncate(TOP_CATEGORIES);

    let recent = weekly
        .iter()
        .take(RECENT_EXPENSES)
        .map(|expense| (*expense).clone())
        .collect();

    WeeklySummary {
        total_spent,
        remaining: weekly_budget - total_spent,
        by_category,
        recent,
    }
}
