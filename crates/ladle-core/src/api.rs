//! API gateway client.
//!
//! A single `reqwest::Client` wrapping the backend's REST surface. The
//! client attaches the bearer token from the shared [`TokenHandle`] to
//! authenticated calls; there is no retry or backoff. The one concession is
//! the 401 path: an authenticated call that comes back unauthorized
//! triggers exactly one refresh round trip and one replay of the original
//! request before giving up with [`ApiError::Unauthorized`].

use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::comments::PAGE_SIZE;
use crate::config::BootstrapConfig;
use crate::error::{parse_api_error, ApiError, Result};
use crate::models::{
    CalendarDraft, CalendarEntry, CalendarId, CalendarQuery, CommentId, CommentNode, ForumCategory,
    ForumPost, ForumPostId, LoginRequest, LoginResponse, MemberRow, NewComment, NewForumPost,
    Profile, RecipeCategory, RecipeDetail, RecipeSummary, SignupPoint, SignupRequest,
    TopRatedRecipe,
};
use crate::session::TokenHandle;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    tokens: TokenHandle,
}

impl ApiClient {
    pub fn new(config: &BootstrapConfig, tokens: TokenHandle) -> Result<Self> {
        Ok(Self {
            base_url: config.api_base_url.clone(),
            client: Client::builder().build()?,
            tokens,
        })
    }

    /// Absolute URL under the versioned API root.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.endpoint("/auth/login"))
            .json(request)
            .send()
            .await?;
        expect_json(response).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<bool> {
        let response = self
            .client
            .post(self.endpoint("/auth/signup"))
            .json(request)
            .send()
            .await?;
        expect_json(response).await
    }

    /// The bootstrap "who am I" call. Identity fields come from here on
    /// every load; they are never persisted client-side.
    pub async fn my_info(&self) -> Result<Profile> {
        let response = self
            .send_authed(|client| client.get(self.endpoint("/auth/me")))
            .await?;
        expect_json(response).await
    }

    // ------------------------------------------------------------------
    // Calendar
    // ------------------------------------------------------------------

    /// Fetch all entries in a member's date-range window. Public on the
    /// backend so other members' profile calendars render too.
    pub async fn search_calendar(&self, query: &CalendarQuery) -> Result<Vec<CalendarEntry>> {
        let response = self
            .client
            .post(self.endpoint("/calendars/search"))
            .json(query)
            .send()
            .await?;
        expect_json(response).await
    }

    pub async fn calendar_exists(&self, date: NaiveDate, recipe_id: &str) -> Result<bool> {
        let response = self
            .send_authed(|client| {
                client.get(self.endpoint(&format!("/calendars/exists/{date}/{recipe_id}")))
            })
            .await?;
        expect_json(response).await
    }

    pub async fn create_calendar(&self, draft: &CalendarDraft) -> Result<bool> {
        let response = self
            .send_authed(|client| client.post(self.endpoint("/calendars")).json(draft))
            .await?;
        expect_json(response).await
    }

    pub async fn update_calendar(&self, id: CalendarId, draft: &CalendarDraft) -> Result<bool> {
        let response = self
            .send_authed(|client| {
                client
                    .put(self.endpoint(&format!("/calendars/{id}")))
                    .json(draft)
            })
            .await?;
        expect_json(response).await
    }

    pub async fn delete_calendar(&self, id: CalendarId) -> Result<bool> {
        let response = self
            .send_authed(|client| client.delete(self.endpoint(&format!("/calendars/{id}"))))
            .await?;
        expect_json(response).await
    }

    pub async fn top_rated(&self, category: RecipeCategory) -> Result<Vec<TopRatedRecipe>> {
        let response = self
            .client
            .get(self.endpoint(&format!("/calendars/top/{}", category.as_str())))
            .send()
            .await?;
        expect_json(response).await
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    /// One page of top-level comments, replies nested by the server.
    pub async fn comments(&self, post_id: &str, page: u32) -> Result<Vec<CommentNode>> {
        let response = self
            .client
            .get(self.endpoint(&format!("/comments/{post_id}")))
            .query(&[("page", page), ("size", PAGE_SIZE)])
            .send()
            .await?;
        expect_json(response).await
    }

    pub async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<bool> {
        let response = self
            .send_authed(|client| {
                client
                    .post(self.endpoint(&format!("/comments/{post_id}")))
                    .json(comment)
            })
            .await?;
        expect_json(response).await
    }

    pub async fn create_reply(&self, parent_id: CommentId, reply: &NewComment) -> Result<bool> {
        let response = self
            .send_authed(|client| {
                client
                    .post(self.endpoint(&format!("/comments/reply/{parent_id}")))
                    .json(reply)
            })
            .await?;
        expect_json(response).await
    }

    // ------------------------------------------------------------------
    // Recipes
    // ------------------------------------------------------------------

    pub async fn recipes(&self, category: RecipeCategory, page: u32) -> Result<Vec<RecipeSummary>> {
        let response = self
            .client
            .get(self.endpoint(&format!("/recipes/{}", category.as_str())))
            .query(&[("page", page)])
            .send()
            .await?;
        expect_json(response).await
    }

    pub async fn recipe_detail(&self, category: RecipeCategory, id: &str) -> Result<RecipeDetail> {
        let response = self
            .client
            .get(self.endpoint(&format!("/recipes/{}/{id}", category.as_str())))
            .send()
            .await?;
        expect_json(response).await
    }

    // ------------------------------------------------------------------
    // Forum
    // ------------------------------------------------------------------

    pub async fn forum_categories(&self) -> Result<Vec<ForumCategory>> {
        let response = self
            .client
            .get(self.endpoint("/forums/categories"))
            .send()
            .await?;
        expect_json(response).await
    }

    pub async fn forum_posts(&self, category_id: i64, page: u32) -> Result<Vec<ForumPost>> {
        let response = self
            .client
            .get(self.endpoint("/forums/posts"))
            .query(&[
                ("categoryId", category_id.to_string()),
                ("page", page.to_string()),
                ("size", PAGE_SIZE.to_string()),
            ])
            .send()
            .await?;
        expect_json(response).await
    }

    pub async fn forum_post(&self, id: ForumPostId) -> Result<ForumPost> {
        let response = self
            .client
            .get(self.endpoint(&format!("/forums/posts/{id}")))
            .send()
            .await?;
        expect_json(response).await
    }

    pub async fn create_forum_post(&self, draft: &NewForumPost) -> Result<ForumPost> {
        let response = self
            .send_authed(|client| client.post(self.endpoint("/forums/posts")).json(draft))
            .await?;
        expect_json(response).await
    }

    /// Replace a post's body. Title edits go through the same endpoint on
    /// the backend's title route; the client only exposes content edits.
    pub async fn update_forum_post(&self, id: ForumPostId, content: &str) -> Result<bool> {
        let payload = serde_json::json!({ "content": content });
        let response = self
            .send_authed(|client| {
                client
                    .put(self.endpoint(&format!("/forums/posts/{id}/content")))
                    .json(&payload)
            })
            .await?;
        expect_json(response).await
    }

    pub async fn delete_forum_post(&self, id: ForumPostId) -> Result<bool> {
        let response = self
            .send_authed(|client| client.delete(self.endpoint(&format!("/forums/posts/{id}"))))
            .await?;
        expect_json(response).await
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    pub async fn admin_members(&self) -> Result<Vec<MemberRow>> {
        let response = self
            .send_authed(|client| client.get(self.endpoint("/admin/members")))
            .await?;
        expect_json(response).await
    }

    pub async fn admin_signup_chart(&self) -> Result<Vec<SignupPoint>> {
        let response = self
            .send_authed(|client| client.get(self.endpoint("/admin/charts/signups")))
            .await?;
        expect_json(response).await
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn attach_bearer(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(tokens) => request.bearer_auth(tokens.access_token),
            None => request,
        }
    }

    /// Send an authenticated request; on 401, refresh once and replay once.
    async fn send_authed<F>(&self, build: F) -> Result<Response>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        let response = self.attach_bearer(build(&self.client)).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        self.refresh_access_token().await?;

        let retried = self.attach_bearer(build(&self.client)).send().await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        Ok(retried)
    }

    /// One refresh round trip. A failure here means the session is gone and
    /// the caller is expected to force logout.
    async fn refresh_access_token(&self) -> Result<()> {
        let Some(tokens) = self.tokens.get() else {
            return Err(ApiError::Unauthorized);
        };

        let payload = serde_json::json!({ "refreshToken": tokens.refresh_token });
        let response = self
            .client
            .post(self.endpoint("/auth/refresh"))
            .bearer_auth(&tokens.access_token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Token refresh rejected with {}", response.status());
            return Err(ApiError::Unauthorized);
        }

        let access_token = response.json::<String>().await?;
        self.tokens.set_access_token(access_token);
        tracing::debug!("Access token rotated after 401");
        Ok(())
    }
}

async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Api(parse_api_error(status, &body)));
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> ApiClient {
        let config = BootstrapConfig::default();
        ApiClient::new(&config, TokenHandle::default()).unwrap()
    }

    #[test]
    fn endpoint_joins_under_versioned_root() {
        let api = client();
        assert_eq!(
            api.endpoint("/auth/login"),
            "http://localhost:8111/api/v1/auth/login"
        );
        assert_eq!(
            api.endpoint("/calendars/42"),
            "http://localhost:8111/api/v1/calendars/42"
        );
    }

    #[test]
    fn endpoint_respects_configured_base_url() {
        let config = BootstrapConfig::from_values(
            Some("https://api.ladle.app/".to_string()),
            None,
        )
        .unwrap();
        let api = ApiClient::new(&config, TokenHandle::default()).unwrap();
        assert_eq!(
            api.endpoint("/auth/me"),
            "https://api.ladle.app/api/v1/auth/me"
        );
    }
}
