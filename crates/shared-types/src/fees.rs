use serde::Serialize;

/// Payment state shared by fee records and transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayStatus {
    Paid,
    Pending,
    Overdue,
    Partial,
    Completed,
}

impl PayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayStatus::Paid => "paid",
            PayStatus::Pending => "pending",
            PayStatus::Overdue => "overdue",
            PayStatus::Partial => "partial",
            PayStatus::Completed => "completed",
        }
    }
}

/// A fee line item as a parent sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeRecord {
    pub id: &'static str,
    pub fee_head: &'static str,
    pub amount: u32,
    pub due_date: &'static str,
    pub status: PayStatus,
}

/// A collected (or attempted) payment as the accountant sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transaction {
    pub id: &'static str,
    pub student: &'static str,
    pub class: &'static str,
    pub amount: u32,
    pub method: &'static str,
    pub date: &'static str,
    pub status: PayStatus,
}

/// A student with fees outstanding past the due date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Defaulter {
    pub student: &'static str,
    pub class: &'static str,
    pub pending: u32,
    pub due_date: &'static str,
    pub overdue_days: u32,
}

/// Indian-style grouping for rupee amounts (12,34,567).
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("\u{20b9}{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    let head_bytes = head.as_bytes();
    for (i, b) in head_bytes.iter().enumerate() {
        if i > 0 && (head_bytes.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }
    format!("\u{20b9}{grouped},{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rupee_grouping() {
        assert_eq!(format_rupees(0), "\u{20b9}0");
        assert_eq!(format_rupees(999), "\u{20b9}999");
        assert_eq!(format_rupees(25000), "\u{20b9}25,000");
        assert_eq!(format_rupees(2500000), "\u{20b9}25,00,000");
        assert_eq!(format_rupees(25000000), "\u{20b9}2,50,00,000");
    }
}
