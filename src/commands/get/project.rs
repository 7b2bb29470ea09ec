use std::io::Write;

use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::Parser;
use reqwest::{StatusCode, Url};

use super::types::Project;
use super::util::format_project;
use crate::config::{EXEC_NAME, PROJECTS_API_PATH};
use crate::state::http::HttpClient;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(
    about = "Get the project definition",
    long_about = "Get the project definition. Uses the project set with `rhm use project <guid>` unless --project=<guid> is passed"
)]
pub struct Options {
    #[clap(long = "project", help = "The project guid")]
    pub project: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let mut out = std::io::stdout();

    get_project(&state, options.project, &mut out).await?;

    out.flush()?;

    Ok(())
}

/// Fetches a project and writes it to `out`.
///
/// On a non-200 response the raw body is written to `out` before failing,
/// so server side error payloads are visible.
pub async fn get_project<W>(state: &State, project: Option<String>, out: &mut W) -> Result<()>
where
    W: Write,
{
    let session = state.session().await?;

    let project = resolve_project(project, session.active_project())?;
    let url = project_url(&session.host, &project)?;

    let request = HttpClient::session_get(url, &session.auth)?;
    let response = state
        .http
        .send(request)
        .await
        .context("Failed to get project")?;

    if response.status != StatusCode::OK {
        out.write_all(&response.body)?;

        bail!("unexpected response {}", response.status.as_u16());
    }

    let project = serde_json::from_slice::<Project>(&response.body)
        .context("Failed to deserialize project")?;

    out.write_all(format_project(&project).as_bytes())?;

    Ok(())
}

/// An explicit project wins over the active one.
pub fn resolve_project(explicit: Option<String>, active: Option<&str>) -> Result<String> {
    let project = explicit
        .filter(|p| !p.is_empty())
        .or_else(|| active.map(str::to_string))
        .unwrap_or_default();

    ensure!(
        !project.is_empty(),
        "expected a project guid. Use --project or `{EXEC_NAME} use project <guid>`"
    );

    Ok(project)
}

/// `{host}/box/api/projects/{project}`, with the project kept as a single
/// percent-encoded path segment.
pub fn project_url(host: &str, project: &str) -> Result<Url> {
    ensure!(
        !matches!(project, "." | ".."),
        "invalid project guid `{project}`"
    );

    let mut url = Url::parse(host)
        .with_context(|| format!("could not create new request object for host `{host}`"))?;

    url.path_segments_mut()
        .map_err(|()| anyhow!("could not create new request object: `{host}` is not a base url"))?
        .pop_if_empty()
        .extend(PROJECTS_API_PATH.split('/').filter(|s| !s.is_empty()))
        .push(project);

    Ok(url)
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use anyhow::anyhow;
    use async_trait::async_trait;
    use reqwest::header::COOKIE;
    use reqwest::{Request, Response};

    use super::*;
    use crate::state::http::{HttpClient, Requester};
    use crate::store::user::UserData;
    use crate::store::Storer;

    #[derive(Debug)]
    struct MemoryStore(UserData);

    #[async_trait]
    impl Storer for MemoryStore {
        async fn read_user_data(&self) -> Result<UserData> {
            Ok(self.0.clone())
        }

        async fn write_user_data(&self, _data: &UserData) -> Result<()> {
            Err(anyhow!("read only"))
        }
    }

    /// Records every request as `(url, cookie)` and fails like a dead network.
    #[derive(Debug, Clone, Default)]
    struct RecordingRequester {
        requests: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl Requester for RecordingRequester {
        async fn execute(&self, request: Request) -> Result<Response> {
            let cookie = request
                .headers()
                .get(COOKIE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();

            self.requests
                .lock()
                .unwrap()
                .push((request.url().to_string(), cookie));

            Err(anyhow!("connection refused"))
        }
    }

    fn state(active_project: Option<&str>) -> (State, RecordingRequester) {
        let requester = RecordingRequester::default();

        let state = State::with_parts(
            MemoryStore(UserData {
                host: "https://api.example.com".to_string(),
                auth: "tok123".to_string(),
                active_project: active_project.map(str::to_string),
            }),
            HttpClient::with_requester(requester.clone()),
        );

        (state, requester)
    }

    #[tokio::test]
    async fn test_missing_project_makes_no_request() {
        let (state, requester) = state(None);
        let mut out = Vec::<u8>::new();

        let error = get_project(&state, None, &mut out).await.unwrap_err();

        assert!(error.to_string().contains("expected a project guid"));
        assert!(requester.requests.lock().unwrap().is_empty());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_empty_flag_and_empty_active_project() {
        let (state, requester) = state(Some(""));

        assert!(get_project(&state, Some(String::new()), &mut Vec::<u8>::new())
            .await
            .is_err());
        assert!(requester.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_explicit_project_wins() {
        let (state, requester) = state(Some("proj-9"));

        let error = get_project(&state, Some("abc-1".to_string()), &mut Vec::<u8>::new())
            .await
            .unwrap_err();

        assert!(format!("{error:#}").contains("connection refused"));
        assert_eq!(
            *requester.requests.lock().unwrap(),
            vec![(
                "https://api.example.com/box/api/projects/abc-1".to_string(),
                "feedhenry=tok123".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_active_project_used() {
        let (state, requester) = state(Some("proj-9"));

        get_project(&state, None, &mut Vec::<u8>::new()).await.unwrap_err();

        assert_eq!(
            requester.requests.lock().unwrap()[0].0,
            "https://api.example.com/box/api/projects/proj-9"
        );
    }

    #[tokio::test]
    async fn test_malformed_host() {
        let requester = RecordingRequester::default();
        let state = State::with_parts(
            MemoryStore(UserData {
                host: "not a host".to_string(),
                ..Default::default()
            }),
            HttpClient::with_requester(requester.clone()),
        );

        let error = get_project(&state, Some("abc-1".to_string()), &mut Vec::<u8>::new())
            .await
            .unwrap_err();

        assert!(error
            .to_string()
            .contains("could not create new request object"));
        assert!(requester.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_project() {
        assert_eq!(resolve_project(Some("a".into()), Some("b")).unwrap(), "a");
        assert_eq!(resolve_project(None, Some("b")).unwrap(), "b");
        assert_eq!(resolve_project(Some(String::new()), Some("b")).unwrap(), "b");
        assert!(resolve_project(None, None).is_err());
    }

    #[tokio::test]
    async fn test_path_like_project_stays_under_projects() {
        let (state, requester) = state(None);

        get_project(&state, Some("../secrets".to_string()), &mut Vec::<u8>::new())
            .await
            .unwrap_err();

        assert_eq!(
            requester.requests.lock().unwrap()[0].0,
            "https://api.example.com/box/api/projects/..%2Fsecrets"
        );
    }

    #[tokio::test]
    async fn test_dot_segment_project_makes_no_request() {
        let (state, requester) = state(None);

        let error = get_project(&state, Some("..".to_string()), &mut Vec::<u8>::new())
            .await
            .unwrap_err();

        assert!(error.to_string().contains("invalid project guid"));
        assert!(requester.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_project_url() {
        assert_eq!(
            project_url("https://api.example.com", "abc-1")
                .unwrap()
                .as_str(),
            "https://api.example.com/box/api/projects/abc-1"
        );
        assert_eq!(
            project_url("https://api.example.com/", "abc-1")
                .unwrap()
                .as_str(),
            "https://api.example.com/box/api/projects/abc-1"
        );
    }

    #[test]
    fn test_project_url_encodes_reserved_characters() {
        assert_eq!(
            project_url("https://api.example.com", "a?b#c/d")
                .unwrap()
                .as_str(),
            "https://api.example.com/box/api/projects/a%3Fb%23c%2Fd"
        );
    }

    #[test]
    fn test_project_url_invalid_host() {
        let error = project_url("/box", "abc-1").unwrap_err();

        assert!(error
            .to_string()
            .contains("could not create new request object"));
        assert!(project_url("mailto:someone@example.com", "abc-1").is_err());
    }
}
