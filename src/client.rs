//! HTTP client for the external transaction service.

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::{
    Error,
    date::{DateRange, format_date, parse_date},
    transaction::Transaction,
};

/// The path transactions are served from, relative to the base URL.
const TRANSACTIONS_PATH: &str = "/api/v1/transactions/";

/// The static credential presented to the transaction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// A pre-encoded basic credential, sent as `Basic <token>`.
    Basic(String),
    /// A bearer token, sent as `Bearer <token>`.
    Bearer(String),
}

impl Credential {
    fn header_value(&self) -> String {
        match self {
            Credential::Basic(token) => format!("Basic {token}"),
            Credential::Bearer(token) => format!("Bearer {token}"),
        }
    }
}

/// A transaction as it appears on the wire.
///
/// Kept separate from the domain model so the date can go through the strict
/// parser instead of whatever serde would accept.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRecord {
    amount: rust_decimal::Decimal,
    date: String,
    hour: String,
    location: String,
    card_last_digits: String,
    bank_id: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = Error;

    fn try_from(record: TransactionRecord) -> Result<Self, Error> {
        Ok(Transaction {
            amount: record.amount,
            date: parse_date(&record.date)?,
            hour: record.hour,
            location: record.location,
            card_last_digits: record.card_last_digits,
            bank_id: record.bank_id,
        })
    }
}

/// Fetches card transactions for a date range.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl TransactionClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            http: reqwest::Client::new(),
            base_url,
            credential,
        }
    }

    /// Fetches all transactions within `range`, inclusive of both endpoints.
    ///
    /// The service returns transactions already sorted; this client passes
    /// them through unchanged.
    ///
    /// # Errors
    /// Returns [Error::Network] when the service cannot be reached,
    /// [Error::FetchFailure] on a non-2xx response, [Error::InvalidResponseBody]
    /// when the body is not a transaction list, and [Error::InvalidDateFormat]
    /// when a transaction carries a malformed date.
    pub async fn fetch_transactions(&self, range: DateRange) -> Result<Vec<Transaction>, Error> {
        let start = format_date(range.start);
        let end = format_date(range.end);
        tracing::debug!("fetching transactions for {start} through {end}");

        let response = self
            .http
            .get(format!("{}{}", self.base_url, TRANSACTIONS_PATH))
            .query(&[("startDate", &start), ("endDate", &end)])
            .header(AUTHORIZATION, self.credential.header_value())
            .send()
            .await
            .map_err(|error| Error::Network(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchFailure(status.as_u16()));
        }

        let records: Vec<TransactionRecord> = response
            .json()
            .await
            .map_err(|error| Error::InvalidResponseBody(error.to_string()))?;

        records.into_iter().map(Transaction::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use time::macros::date;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    use super::{Credential, TransactionClient};
    use crate::{Error, date::DateRange};

    const RANGE: DateRange = DateRange {
        start: date!(2024 - 01 - 01),
        end: date!(2024 - 01 - 07),
    };

    fn transaction_body() -> serde_json::Value {
        json!([
            {
                "amount": 12500,
                "date": "2024-01-02",
                "hour": "13:45",
                "location": "Supermarket",
                "cardLastDigits": "4821",
                "bankId": "bank-1"
            },
            {
                "amount": 990.5,
                "date": "2024-01-03",
                "hour": "09:10",
                "location": "Bakery",
                "cardLastDigits": "4821",
                "bankId": "bank-1"
            }
        ])
    }

    #[tokio::test]
    async fn fetches_and_decodes_transactions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions/"))
            .and(query_param("startDate", "2024-01-01"))
            .and(query_param("endDate", "2024-01-07"))
            .and(header("Authorization", "Basic c2VjcmV0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(transaction_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TransactionClient::new(server.uri(), Credential::Basic("c2VjcmV0".to_owned()));
        let transactions = client.fetch_transactions(RANGE).await.unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, Decimal::from(12500));
        assert_eq!(transactions[0].date, date!(2024 - 01 - 02));
        assert_eq!(transactions[0].location, "Supermarket");
        assert_eq!(transactions[1].amount, Decimal::new(9905, 1));
        assert_eq!(transactions[1].card_last_digits, "4821");
    }

    #[tokio::test]
    async fn sends_a_bearer_credential_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions/"))
            .and(header("Authorization", "Bearer token-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            TransactionClient::new(server.uri(), Credential::Bearer("token-123".to_owned()));
        let transactions = client.fetch_transactions(RANGE).await.unwrap();

        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = TransactionClient::new(server.uri(), Credential::Basic("x".to_owned()));
        let result = client.fetch_transactions(RANGE).await;

        assert_eq!(result, Err(Error::FetchFailure(503)));
    }

    #[tokio::test]
    async fn unparseable_body_is_an_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = TransactionClient::new(server.uri(), Credential::Basic("x".to_owned()));
        let result = client.fetch_transactions(RANGE).await;

        assert!(matches!(result, Err(Error::InvalidResponseBody(_))));
    }

    #[tokio::test]
    async fn malformed_transaction_date_fails_fast() {
        let server = MockServer::start().await;
        let body = json!([
            {
                "amount": 100,
                "date": "02-01-2024",
                "hour": "13:45",
                "location": "Supermarket",
                "cardLastDigits": "4821",
                "bankId": "bank-1"
            }
        ]);
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = TransactionClient::new(server.uri(), Credential::Basic("x".to_owned()));
        let result = client.fetch_transactions(RANGE).await;

        assert!(
            matches!(result, Err(Error::InvalidDateFormat(_, ref text)) if text == "02-01-2024")
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_a_network_error() {
        // A port nothing is listening on.
        let client = TransactionClient::new(
            "http://127.0.0.1:9",
            Credential::Basic("x".to_owned()),
        );

        let result = client.fetch_transactions(RANGE).await;

        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = TransactionClient::new(
            format!("{}/", server.uri()),
            Credential::Basic("x".to_owned()),
        );

        assert!(client.fetch_transactions(RANGE).await.unwrap().is_empty());
    }
}
