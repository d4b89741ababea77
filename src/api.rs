use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Session;

const API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired")]
    Unauthorized,
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    #[allow(dead_code)]
    user_id: Option<i64>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewDailyRecord {
    pub date: String,
    pub total_income: f64,
    pub total_expense: f64,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DailyRecord {
    pub id: i64,
    pub date: String,
    pub total_income: f64,
    pub total_expense: f64,
}

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewTransaction {
    pub daily_record: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct MonthlySummary {
    pub total_expense: f64,
    pub total_income: f64,
    pub net_balance: f64,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DailyExpenseRow {
    pub date: String,
    pub income: f64,
    pub expense: f64,
}

#[derive(Deserialize)]
struct DailyExpensesResponse {
    daily_expenses: Vec<DailyExpenseRow>,
}

/// One dashboard submission: a date plus the four fixed categories.
#[derive(Clone, PartialEq, Debug)]
pub struct DailyEntryForm {
    pub date: String,
    pub food: f64,
    pub transport: f64,
    pub salary: f64,
    pub coffee_sales: f64,
}

impl DailyEntryForm {
    pub fn total_income(&self) -> f64 {
        self.salary + self.coffee_sales
    }

    pub fn total_expense(&self) -> f64 {
        self.food + self.transport
    }

    pub fn record_payload(&self) -> NewDailyRecord {
        NewDailyRecord {
            date: self.date.clone(),
            total_income: self.total_income(),
            total_expense: self.total_expense(),
        }
    }

    /// The four transaction payloads in their fixed creation order:
    /// food, transport, salary, coffeeSales.
    pub fn transaction_payloads(&self, daily_record: i64) -> Vec<NewTransaction> {
        let entries = [
            (TransactionKind::Expense, "food", self.food),
            (TransactionKind::Expense, "transport", self.transport),
            (TransactionKind::Income, "salary", self.salary),
            (TransactionKind::Income, "coffeeSales", self.coffee_sales),
        ];
        entries
            .into_iter()
            .map(|(kind, category, amount)| NewTransaction {
                daily_record,
                kind,
                category: category.to_string(),
                amount,
                date: self.date.clone(),
            })
            .collect()
    }
}

/// The slice of the API the daily-entry sequence touches. Split out as a
/// trait so the sequence can run against an in-memory store in tests.
#[allow(async_fn_in_trait)]
pub trait EntryStore {
    async fn create_daily_record(&self, record: &NewDailyRecord) -> Result<DailyRecord, ApiError>;
    async fn create_transaction(&self, tx: &NewTransaction) -> Result<(), ApiError>;
    async fn delete_daily_record(&self, id: i64) -> Result<(), ApiError>;
}

/// Creates the daily record, then its four transactions one at a time in
/// fixed order. The sequence aborts on the first failure; if a transaction
/// fails after the record was created, the record is deleted again so no
/// partial entry survives on the server.
pub async fn submit_daily_entry<S: EntryStore>(
    store: &S,
    form: &DailyEntryForm,
) -> Result<DailyRecord, ApiError> {
    let record = store.create_daily_record(&form.record_payload()).await?;

    for tx in form.transaction_payloads(record.id) {
        if let Err(err) = store.create_transaction(&tx).await {
            log::error!("creating {} transaction failed: {}", tx.category, err);
            if let Err(rollback_err) = store.delete_daily_record(record.id).await {
                log::error!(
                    "rollback of daily record {} failed: {}",
                    record.id,
                    rollback_err
                );
            }
            return Err(err);
        }
    }

    Ok(record)
}

/// Typed client for the finance API. Holds the session it authenticates
/// with; an absent session sends an empty `Authorization` value.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    session: Option<Session>,
}

fn request_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

async fn error_from(resp: Response) -> ApiError {
    if resp.status() == 401 {
        return ApiError::Unauthorized;
    }
    let body = resp.text().await.unwrap_or_else(|_| String::new());
    ApiError::Server {
        status: resp.status(),
        body,
    }
}

impl ApiClient {
    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }

    fn url(path: &str) -> String {
        format!("{}{}", API_BASE_URL, path)
    }

    fn auth_header(&self) -> String {
        Session::auth_header(self.session.as_ref())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let resp = Request::post(&Self::url("/api/login/"))
            .json(&Credentials { username, password })
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        let body: LoginResponse = resp.json().await.map_err(decode_error)?;
        Ok(Session {
            token: body.token,
            username: username.to_string(),
        })
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let resp = Request::post(&Self::url("/api/register/"))
            .json(&Credentials { username, password })
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }

    pub async fn monthly_summary(&self, month: u32, year: i32) -> Result<MonthlySummary, ApiError> {
        let url = Self::url(&format!(
            "/api/transactions/monthly/?month={}&year={}",
            month, year
        ));
        let resp = Request::get(&url)
            .header("Authorization", &self.auth_header())
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        resp.json().await.map_err(decode_error)
    }

    pub async fn daily_expenses(
        &self,
        month: u32,
        year: i32,
    ) -> Result<Vec<DailyExpenseRow>, ApiError> {
        let url = Self::url(&format!(
            "/api/transactions/daily-expenses/?month={}&year={}",
            month, year
        ));
        let resp = Request::get(&url)
            .header("Authorization", &self.auth_header())
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        let body: DailyExpensesResponse = resp.json().await.map_err(decode_error)?;
        Ok(body.daily_expenses)
    }

    pub async fn send_monthly_report(&self) -> Result<(), ApiError> {
        let resp = Request::post(&Self::url("/api/transactions/send-monthly-report/"))
            .header("Authorization", &self.auth_header())
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }
}

impl EntryStore for ApiClient {
    async fn create_daily_record(&self, record: &NewDailyRecord) -> Result<DailyRecord, ApiError> {
        let resp = Request::post(&Self::url("/api/daily-records/"))
            .header("Authorization", &self.auth_header())
            .json(record)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        resp.json().await.map_err(decode_error)
    }

    async fn create_transaction(&self, tx: &NewTransaction) -> Result<(), ApiError> {
        let resp = Request::post(&Self::url("/api/transactions/"))
            .header("Authorization", &self.auth_header())
            .json(tx)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }

    async fn delete_daily_record(&self, id: i64) -> Result<(), ApiError> {
        let url = Self::url(&format!("/api/daily-records/{}/", id));
        let resp = Request::delete(&url)
            .header("Authorization", &self.auth_header())
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn sample_form() -> DailyEntryForm {
        DailyEntryForm {
            date: "2024-03-15".to_string(),
            food: 120.0,
            transport: 45.5,
            salary: 3000.0,
            coffee_sales: 250.25,
        }
    }

    #[test]
    fn totals_are_client_side_sums() {
        let form = sample_form();
        assert_eq!(form.total_income(), 3250.25);
        assert_eq!(form.total_expense(), 165.5);

        let record = form.record_payload();
        assert_eq!(record.date, "2024-03-15");
        assert_eq!(record.total_income, 3250.25);
        assert_eq!(record.total_expense, 165.5);
    }

    #[test]
    fn transaction_payloads_keep_fixed_order() {
        let form = sample_form();
        let payloads = form.transaction_payloads(42);

        assert_eq!(payloads.len(), 4);
        let summary: Vec<(&str, TransactionKind, f64)> = payloads
            .iter()
            .map(|tx| (tx.category.as_str(), tx.kind, tx.amount))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("food", TransactionKind::Expense, 120.0),
                ("transport", TransactionKind::Expense, 45.5),
                ("salary", TransactionKind::Income, 3000.0),
                ("coffeeSales", TransactionKind::Income, 250.25),
            ]
        );
        for tx in &payloads {
            assert_eq!(tx.daily_record, 42);
            assert_eq!(tx.date, "2024-03-15");
        }
    }

    #[test]
    fn transaction_serializes_type_field() {
        let tx = NewTransaction {
            daily_record: 7,
            kind: TransactionKind::Expense,
            category: "food".to_string(),
            amount: 12.5,
            date: "2024-03-15".to_string(),
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "daily_record": 7,
                "type": "expense",
                "category": "food",
                "amount": 12.5,
                "date": "2024-03-15",
            })
        );
    }

    #[test]
    fn monthly_summary_decodes_three_fields() {
        let summary: MonthlySummary = serde_json::from_str(
            r#"{"total_expense": 410.0, "total_income": 5200.0, "net_balance": 4790.0}"#,
        )
        .unwrap();
        assert_eq!(summary.total_expense, 410.0);
        assert_eq!(summary.total_income, 5200.0);
        assert_eq!(summary.net_balance, 4790.0);
    }

    #[test]
    fn daily_expenses_decodes_envelope() {
        let body: DailyExpensesResponse = serde_json::from_str(
            r#"{"daily_expenses": [{"date": "2024-03-01", "income": 100.0, "expense": 20.0}]}"#,
        )
        .unwrap();
        assert_eq!(body.daily_expenses.len(), 1);
        assert_eq!(body.daily_expenses[0].date, "2024-03-01");
        assert_eq!(body.daily_expenses[0].income, 100.0);
        assert_eq!(body.daily_expenses[0].expense, 20.0);
    }

    #[test]
    fn login_response_decodes_token() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"token": "abc123", "user_id": 9}"#).unwrap();
        assert_eq!(body.token, "abc123");
        assert_eq!(body.user_id, Some(9));
    }

    struct RecordingStore {
        calls: RefCell<Vec<String>>,
        fail_record: bool,
        fail_category: Option<&'static str>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_record: false,
                fail_category: None,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl EntryStore for RecordingStore {
        async fn create_daily_record(
            &self,
            record: &NewDailyRecord,
        ) -> Result<DailyRecord, ApiError> {
            self.calls.borrow_mut().push("record".to_string());
            if self.fail_record {
                return Err(ApiError::Server {
                    status: 500,
                    body: "record failed".to_string(),
                });
            }
            Ok(DailyRecord {
                id: 77,
                date: record.date.clone(),
                total_income: record.total_income,
                total_expense: record.total_expense,
            })
        }

        async fn create_transaction(&self, tx: &NewTransaction) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("tx:{}", tx.category));
            if self.fail_category == Some(tx.category.as_str()) {
                return Err(ApiError::Server {
                    status: 500,
                    body: "transaction failed".to_string(),
                });
            }
            Ok(())
        }

        async fn delete_daily_record(&self, id: i64) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete:{}", id));
            Ok(())
        }
    }

    #[tokio::test]
    async fn submit_creates_record_then_four_transactions() {
        let store = RecordingStore::new();
        let record = submit_daily_entry(&store, &sample_form()).await.unwrap();

        assert_eq!(record.id, 77);
        assert_eq!(
            store.calls(),
            vec!["record", "tx:food", "tx:transport", "tx:salary", "tx:coffeeSales"]
        );
    }

    #[tokio::test]
    async fn record_failure_attempts_no_transactions() {
        let store = RecordingStore {
            fail_record: true,
            ..RecordingStore::new()
        };
        let result = submit_daily_entry(&store, &sample_form()).await;

        assert!(result.is_err());
        assert_eq!(store.calls(), vec!["record"]);
    }

    #[tokio::test]
    async fn transaction_failure_stops_sequence_and_deletes_record() {
        let store = RecordingStore {
            fail_category: Some("transport"),
            ..RecordingStore::new()
        };
        let result = submit_daily_entry(&store, &sample_form()).await;

        assert!(result.is_err());
        assert_eq!(
            store.calls(),
            vec!["record", "tx:food", "tx:transport", "delete:77"]
        );
    }
}
