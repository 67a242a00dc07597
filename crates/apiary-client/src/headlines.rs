//! NewsAPI top headlines.
//!
//! The only endpoint whose response is reshaped: the request carries the
//! country and API key as query parameters, and the reply is rendered as a
//! markdown table plus the raw headline titles.
//!
//! The `country` parameter is declared required in the tool schema, but a
//! call without it falls back to [`DEFAULT_COUNTRY`] instead of failing.

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::outcome::{HttpReply, Outcome};
use apiary_core::{Arguments, EndpointDescriptor, argument_text};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt::Write;
use tracing::{debug, info};

/// Country used when the call does not provide one.
pub const DEFAULT_COUNTRY: &str = "us";

/// Name of the country argument.
pub const COUNTRY_PARAM: &str = "country";

const TABLE_HEADER: &str = "| # | Headline | Link |\n|---|----------|------|\n";

/// A single article from the NewsAPI response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Article {
    /// Headline text.
    pub title: Option<String>,
    /// Article URL.
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NewsEnvelope {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    articles: Option<Value>,
}

/// Formatted headlines returned as the tool payload.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesReport {
    /// Upstream status code.
    pub status: u16,
    /// Upstream status text.
    pub status_text: String,
    /// Country the headlines were fetched for.
    pub country: String,
    /// Markdown table of rank, title and link.
    pub table: String,
    /// Raw titles, in upstream order.
    pub headlines: Vec<Option<String>>,
}

/// The country to query: the provided argument, or [`DEFAULT_COUNTRY`].
pub fn country(args: &Arguments) -> String {
    argument_text(args, COUNTRY_PARAM).unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
}

pub(crate) async fn fetch(
    client: &ApiClient,
    endpoint: &EndpointDescriptor,
    args: &Arguments,
) -> Result<Value> {
    let country = country(args);
    let url = endpoint.endpoint_url();
    info!(tool = %endpoint.name, %url, %country, "API call");

    let mut query = vec![(COUNTRY_PARAM, country.as_str())];
    match client.config().news_api_key() {
        Some(key) => query.push(("apiKey", key)),
        None => debug!("No NewsAPI key configured; sending request without one"),
    }

    let reply = match client.send(client.http().get(&url).query(&query)).await {
        Outcome::Success(reply) | Outcome::HttpError(reply) => reply,
        Outcome::Failure(err) => return Err(Error::headlines(err.to_string())),
    };

    summarize(reply, &country)
}

/// Turn a NewsAPI reply into the tool payload.
///
/// The envelope's `status` decides success, whatever the HTTP status: any
/// value other than `"ok"` fails with the upstream `message`.
pub fn summarize(reply: HttpReply, country: &str) -> Result<Value> {
    let envelope: NewsEnvelope = serde_json::from_value(reply.data.clone()).unwrap_or_default();

    if envelope.status.as_ref().and_then(Value::as_str) != Some("ok") {
        let message = match envelope.message {
            Some(Value::String(message)) => message,
            _ if reply.is_success() => "Unknown error from NewsAPI".to_string(),
            _ => format!("Request failed with status code {}", reply.status),
        };
        return Err(Error::headlines(message));
    }

    let articles: Vec<Article> = match envelope.articles {
        None | Some(Value::Null) => Vec::new(),
        Some(raw) => serde_json::from_value(raw)
            .map_err(|e| Error::headlines(format!("Malformed articles in response: {e}")))?,
    };
    if articles.is_empty() {
        return Ok(json!({
            "message": format!("No news headlines found for country code \"{country}\"."),
        }));
    }

    let report = HeadlinesReport {
        status: reply.status,
        status_text: reply.status_text,
        country: country.to_string(),
        table: render_table(&articles),
        headlines: articles.into_iter().map(|a| a.title).collect(),
    };
    Ok(serde_json::to_value(report)?)
}

/// Render articles as a markdown table.
///
/// Pipes inside titles become `-` so they cannot break the table.
pub fn render_table(articles: &[Article]) -> String {
    let mut table = String::from(TABLE_HEADER);
    for (i, article) in articles.iter().enumerate() {
        let title = article
            .title
            .as_deref()
            .map(|t| t.replace('|', "-"))
            .unwrap_or_default();
        let link = article
            .url
            .as_deref()
            .map(|u| format!("[Link]({u})"))
            .unwrap_or_default();
        let _ = writeln!(table, "| {} | {} | {} |", i + 1, title, link);
    }
    table
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn reply(status: u16, data: Value) -> HttpReply {
        HttpReply {
            status,
            status_text: "OK".to_string(),
            data,
            headers: Map::new(),
        }
    }

    fn article(title: Option<&str>, url: Option<&str>) -> Article {
        Article {
            title: title.map(String::from),
            url: url.map(String::from),
        }
    }

    #[test]
    fn test_country_default() {
        assert_eq!(country(&Arguments::new()), "us");
        let mut args = Arguments::new();
        args.insert("country".into(), json!(""));
        assert_eq!(country(&args), "us");
        args.insert("country".into(), json!("gb"));
        assert_eq!(country(&args), "gb");
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&[
            article(Some("Markets | rally"), Some("https://a.example/1")),
            article(None, Some("https://a.example/2")),
            article(Some("No link"), None),
        ]);
        assert_eq!(
            table,
            "| # | Headline | Link |\n\
             |---|----------|------|\n\
             | 1 | Markets - rally | [Link](https://a.example/1) |\n\
             | 2 |  | [Link](https://a.example/2) |\n\
             | 3 | No link |  |\n"
        );
    }

    #[test]
    fn test_summarize_empty_articles() {
        let payload = summarize(reply(200, json!({"status": "ok", "articles": []})), "us").unwrap();
        assert_eq!(
            payload["message"],
            "No news headlines found for country code \"us\"."
        );
    }

    #[test]
    fn test_summarize_missing_articles() {
        let payload = summarize(reply(200, json!({"status": "ok"})), "fr").unwrap();
        assert_eq!(
            payload["message"],
            "No news headlines found for country code \"fr\"."
        );
    }

    #[test]
    fn test_summarize_upstream_error() {
        let err = summarize(
            reply(200, json!({"status": "error", "message": "bad country"})),
            "zz",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch news headlines: bad country");
    }

    #[test]
    fn test_summarize_error_without_message() {
        let err = summarize(reply(200, json!({"status": "error"})), "us").unwrap_err();
        assert!(err.to_string().contains("Unknown error from NewsAPI"));

        let err = summarize(reply(502, json!("Bad Gateway")), "us").unwrap_err();
        assert!(err.to_string().contains("Request failed with status code 502"));
    }

    #[test]
    fn test_summarize_malformed_article_reported() {
        let err = summarize(
            reply(
                200,
                json!({"status": "ok", "articles": [{"title": "Fine"}, {"title": 42}]}),
            ),
            "us",
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Failed to fetch news headlines: Malformed articles"));
        assert!(!message.contains("Unknown error from NewsAPI"));
    }

    #[test]
    fn test_summarize_report() {
        let payload = summarize(
            reply(
                200,
                json!({
                    "status": "ok",
                    "totalResults": 2,
                    "articles": [
                        {"title": "First", "url": "https://n.example/1"},
                        {"title": null, "url": "https://n.example/2"}
                    ]
                }),
            ),
            "gb",
        )
        .unwrap();

        assert_eq!(payload["status"], 200);
        assert_eq!(payload["statusText"], "OK");
        assert_eq!(payload["country"], "gb");
        assert_eq!(payload["headlines"], json!(["First", null]));
        assert!(
            payload["table"]
                .as_str()
                .unwrap()
                .contains("| 1 | First | [Link](https://n.example/1) |")
        );
    }
}
