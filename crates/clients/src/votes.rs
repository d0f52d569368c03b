//! Client for the remote votes service.
//!
//! Votes attach to a post id (see `stockwatch_core::post_ids`). The service
//! documents its request shapes but not its response bodies, so responses
//! are returned as raw JSON.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::http::{endpoint, parse_response};

const SERVICE: &str = "votes";

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

/// Body of `POST /api/votes`.
#[derive(Debug, Serialize)]
struct SubmitVote<'a> {
    user_id: &'a str,
    post_id: &'a str,
    vote_type: VoteType,
}

/// HTTP client for the votes service.
#[derive(Clone)]
pub struct VotesClient {
    client: reqwest::Client,
    base_url: String,
}

impl VotesClient {
    /// * `base_url` - e.g. `http://localhost:5002`.
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Record a user's vote on a post.
    pub async fn submit_vote(
        &self,
        user_id: &str,
        post_id: &str,
        vote_type: VoteType,
    ) -> Result<serde_json::Value, ClientError> {
        let url = endpoint(&self.base_url, &["api", "votes"])?;
        let body = SubmitVote {
            user_id,
            post_id,
            vote_type,
        };

        let response = self.client.post(url).json(&body).send().await?;

        parse_response(SERVICE, response).await
    }

    /// Aggregate vote counts for a post.
    pub async fn get_stats(&self, post_id: &str) -> Result<serde_json::Value, ClientError> {
        let url = endpoint(&self.base_url, &["api", "votes", "stats", post_id])?;

        let response = self.client.get(url).send().await?;

        parse_response(SERVICE, response).await
    }

    /// The vote a user has cast on a post, if any.
    pub async fn get_user_vote(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<serde_json::Value, ClientError> {
        let url = endpoint(
            &self.base_url,
            &["api", "votes", "user", user_id, "post", post_id],
        )?;

        let response = self.client.get(url).send().await?;

        parse_response(SERVICE, response).await
    }
}
