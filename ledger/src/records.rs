//! Records returned by the savings API.
//!
//! DESIGN
//! ======
//! These are transient caches of server state. Decoding is lenient so one odd
//! row never blanks a whole list: unknown or null enum values map to an
//! `Unknown`/`Other` variant, amounts and ratings may arrive as numeric
//! strings (junk reads as zero), and list rows that still fail to decode, such
//! as a row without an id, are dropped. Withdrawals are
//! normalized once here: the collector id, customer name and approver fields
//! are resolved from whichever nested shape the server sent.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::filter::{Listable, StatusKey};
use crate::session::ref_id;

// =============================================================================
// Envelope
// =============================================================================

/// `{ success, data, message }` wrapper used by every endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl<T> Envelope<T> {
    /// Unwrap `data`, treating `success: false` or a missing payload as errors.
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] when `success` is false, [`ApiError::Decode`] when
    /// `data` is absent.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Server {
                status: 200,
                message: self.message.unwrap_or_else(|| crate::error::GENERIC_FAILURE.to_owned()),
            });
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response has no data".to_owned()))
    }
}

/// Decode an envelope's `data` out of a raw JSON body.
///
/// # Errors
///
/// Propagates [`Envelope::into_data`] failures and shape mismatches.
pub fn envelope_data<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value::<Envelope<T>>(body)?.into_data()
}

/// Decode an envelope whose `data` is a list, dropping rows that do not
/// decode instead of failing the whole list.
///
/// # Errors
///
/// Propagates [`Envelope::into_data`] failures, or a `data` that is not a list.
pub fn envelope_rows<T: serde::de::DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    Ok(decode_rows(envelope_data::<Vec<Value>>(body)?))
}

/// The server's confirmation text from an action response, if any.
#[must_use]
pub fn action_message(body: &Value) -> Option<String> {
    crate::error::server_message(body)
}

// =============================================================================
// Transactions
// =============================================================================

/// Direction of a transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Credit,
    Debit,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TxKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Unknown => "unknown",
        }
    }
}

/// Lifecycle status shared by transactions and withdrawal requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl StatusKey for TxStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Approved, Self::Rejected, Self::Completed];

    fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
            Self::Unknown => "Unknown",
        }
    }
}

/// One ledger entry on a customer account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: TxKind,
    #[serde(default, deserialize_with = "lenient")]
    pub status: TxStatus,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    /// Best available timestamp for display.
    #[must_use]
    pub fn when(&self) -> Option<&str> {
        self.date.as_deref().or(self.created_at.as_deref())
    }

    /// Best available note for display.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.reason.as_deref().or(self.description.as_deref())
    }
}

impl Listable for Transaction {
    type Status = TxStatus;

    fn status(&self) -> TxStatus {
        self.status
    }

    fn haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str(), self.kind.as_str(), self.status.key()];
        fields.extend(self.when());
        fields.extend(self.reason.as_deref());
        fields.extend(self.description.as_deref());
        fields
    }
}

/// Totals block of the payments overview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_deposits: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total_withdrawals: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub balance: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub pending_withdrawals: f64,
}

/// `GET /api/payments/getuserpayments/:customerId` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsOverview {
    #[serde(default, deserialize_with = "rows")]
    pub all_transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "rows")]
    pub payments: Vec<Transaction>,
    #[serde(default, deserialize_with = "rows")]
    pub withdrawals: Vec<Transaction>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: PaymentSummary,
}

/// `POST /api/payments/withdraw` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub amount: f64,
    pub reason: String,
    pub account_id: String,
}

// =============================================================================
// Withdrawals (collector view)
// =============================================================================

/// A withdrawal request normalized into one canonical shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Withdrawal {
    pub id: String,
    pub amount: f64,
    pub status: TxStatus,
    pub reason: Option<String>,
    pub requested_at: Option<String>,
    pub account_id: Option<String>,
    pub account_number: Option<String>,
    pub customer_name: Option<String>,
    pub collector_id: Option<String>,
    pub approved_by: Option<String>,
    pub rejected_by: Option<String>,
    pub rejection_reason: Option<String>,
}

impl Withdrawal {
    /// Normalize one raw withdrawal document. Returns `None` without an id.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = ref_id(value)?;
        let account = value.get("accountId").or_else(|| value.get("account"));

        let collector_id = account
            .and_then(|a| a.get("collectorId").or_else(|| a.get("collector")))
            .or_else(|| value.get("collectorId"))
            .or_else(|| value.get("collector"))
            .and_then(ref_id);

        let customer_name = account
            .and_then(|a| a.get("customerId").or_else(|| a.get("customer")))
            .or_else(|| value.get("customerId"))
            .or_else(|| value.get("customer"))
            .and_then(|c| text(c, "name"))
            .or_else(|| text(value, "customerName"));

        Some(Self {
            id,
            amount: value.get("amount").and_then(amount_from_value).unwrap_or_default(),
            status: value
                .get("status")
                .and_then(|s| serde_json::from_value(s.clone()).ok())
                .unwrap_or_default(),
            reason: text(value, "reason"),
            requested_at: text(value, "createdAt").or_else(|| text(value, "date")),
            account_id: account.and_then(ref_id),
            account_number: account.and_then(|a| text(a, "accountNumber")),
            customer_name,
            collector_id,
            approved_by: value.get("approvedBy").and_then(ref_label),
            rejected_by: value.get("rejectedBy").and_then(ref_label),
            rejection_reason: text(value, "rejectionReason"),
        })
    }

    /// Normalize a `data` array, dropping rows without an id.
    #[must_use]
    pub fn list_from_value(data: &Value) -> Vec<Self> {
        data.as_array()
            .map(|rows| rows.iter().filter_map(Self::from_value).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn belongs_to(&self, collector_id: &str) -> bool {
        self.collector_id.as_deref() == Some(collector_id)
    }
}

impl Listable for Withdrawal {
    type Status = TxStatus;

    fn status(&self) -> TxStatus {
        self.status
    }

    fn haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str()];
        fields.extend(self.customer_name.as_deref());
        fields.extend(self.account_number.as_deref());
        fields.extend(self.reason.as_deref());
        fields
    }
}

/// Keep only the withdrawals whose account is managed by `collector_id`.
///
/// The server may or may not scope the list already; the client filters
/// either way.
#[must_use]
pub fn for_collector(items: Vec<Withdrawal>, collector_id: &str) -> Vec<Withdrawal> {
    items.into_iter().filter(|w| w.belongs_to(collector_id)).collect()
}

// =============================================================================
// Feedback
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    General,
    Technical,
    Payment,
    Customer,
    Suggestion,
    #[default]
    #[serde(other)]
    Other,
}

impl FeedbackCategory {
    /// Categories offered in the submit form.
    pub const SELECTABLE: &'static [Self] =
        &[Self::General, Self::Technical, Self::Payment, Self::Customer, Self::Suggestion];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technical => "technical",
            Self::Payment => "payment",
            Self::Customer => "customer",
            Self::Suggestion => "suggestion",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Technical => "Technical issue",
            Self::Payment => "Payments",
            Self::Customer => "Customer related",
            Self::Suggestion => "Suggestion",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::SELECTABLE
            .iter()
            .copied()
            .find(|c| c.key() == key)
            .unwrap_or(Self::Other)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Pending,
    Reviewed,
    Resolved,
    #[default]
    #[serde(other)]
    Unknown,
}

impl StatusKey for FeedbackStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Reviewed, Self::Resolved];

    fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Resolved => "resolved",
            Self::Unknown => "unknown",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Resolved => "Resolved",
            Self::Unknown => "Unknown",
        }
    }
}

/// A 1–5 star rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("rating must be between {} and {}", Self::MIN, Self::MAX))
        }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Feedback sent by the signed-in collector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub category: FeedbackCategory,
    #[serde(default, deserialize_with = "lenient")]
    pub message: String,
    /// Rounded to a whole star; out-of-range values are clamped for display only.
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: u8,
    #[serde(default, deserialize_with = "lenient")]
    pub status: FeedbackStatus,
    #[serde(default, alias = "adminNotes")]
    pub admin_notes: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

impl Feedback {
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.min(Rating::MAX)
    }

    #[must_use]
    pub fn has_admin_notes(&self) -> bool {
        self.admin_notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

impl Listable for Feedback {
    type Status = FeedbackStatus;

    fn status(&self) -> FeedbackStatus {
        self.status
    }

    fn haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.message.as_str(), self.category.label()];
        fields.extend(self.admin_notes.as_deref());
        fields
    }
}

/// `POST /api/feedback/collector/submit` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedbackDraft {
    pub message: String,
    pub rating: Rating,
    pub category: FeedbackCategory,
}

// =============================================================================
// Helpers
// =============================================================================

fn text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Display label for an embedded user reference: its name, else its id.
fn ref_label(value: &Value) -> Option<String> {
    text(value, "name").or_else(|| ref_id(value))
}

fn amount_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value).filter(|n| n.is_finite()).unwrap_or(0.0))
}

/// Any value that does not decode as `T` (null, wrong type) becomes `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let stars = amount_from_value(&value)
        .filter(|n| n.is_finite())
        .map_or(0.0, |n| n.round().clamp(0.0, f64::from(u8::MAX)));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stars = stars as u8;
    Ok(stars)
}

fn decode_rows<T: serde::de::DeserializeOwned>(rows: Vec<Value>) -> Vec<T> {
    rows.into_iter().flat_map(serde_json::from_value::<T>).collect()
}

/// A list field that keeps every row that decodes; a non-list becomes empty.
fn rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(decode_rows(items)),
        _ => Ok(Vec::new()),
    }
}
