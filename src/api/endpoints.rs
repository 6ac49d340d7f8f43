use serde::{Deserialize, Serialize};
use url::Url;

const LOGIN_PATH: &str = "/api/users/login";
const QUIZ_GENERATE_PATH: &str = "/api/quiz/generate";
const QUIZ_NEW_PATH: &str = "/api/quiz/new";

/// The two quiz endpoints. Both take a `QuizRequest` and answer with the same envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizEndpoint {
    #[default]
    Generate,
    New,
}

impl QuizEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            QuizEndpoint::Generate => QUIZ_GENERATE_PATH,
            QuizEndpoint::New => QUIZ_NEW_PATH,
        }
    }
}

fn build_endpoint_url(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    url.set_path(&format!("{prefix}{path}"));
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Endpoint URLs resolved once against the configured base.
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    login: Url,
    quiz_generate: Url,
    quiz_new: Url,
}

impl ApiEndpoints {
    pub fn new(base: &Url) -> Self {
        Self {
            login: build_endpoint_url(base, LOGIN_PATH),
            quiz_generate: build_endpoint_url(base, QUIZ_GENERATE_PATH),
            quiz_new: build_endpoint_url(base, QUIZ_NEW_PATH),
        }
    }

    pub fn login(&self) -> &Url {
        &self.login
    }

    pub fn quiz(&self, endpoint: QuizEndpoint) -> &Url {
        match endpoint {
            QuizEndpoint::Generate => &self.quiz_generate,
            QuizEndpoint::New => &self.quiz_new,
        }
    }
}
