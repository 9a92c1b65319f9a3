//! Smoke-test scenarios and runner
//!
//! Each scenario is one independent workflow: authenticate when the
//! capability under test needs it, create prerequisite resources, exercise
//! a single API capability, assert on the response, and tear down whatever
//! was created on a best-effort basis. Scenarios share nothing with each
//! other beyond whatever state previous runs left on the server.

mod runner;
mod scenarios;

pub use runner::{run_scenarios, summarize, TestResult};

/// A registered smoke-test scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Password login returns a usable token
    Login,
    /// Google OAuth sign-in returns a usable token
    GoogleAuth,
    /// Session creation echoes every submitted field
    CreateSession,
    /// The session listing is well-formed
    ListSessions,
    /// A deleted session is no longer retrievable
    DeleteSession,
    /// Chat messages are echoed with their session binding intact
    ChatMessage,
    /// Feedback submission echoes rating and comment
    Feedback,
    /// Blockchain verification issues tokens for a valid proof
    BlockchainVerify,
}

impl Scenario {
    /// Every registered scenario, in execution order
    pub const ALL: [Self; 8] = [
        Self::Login,
        Self::GoogleAuth,
        Self::CreateSession,
        Self::ListSessions,
        Self::DeleteSession,
        Self::ChatMessage,
        Self::Feedback,
        Self::BlockchainVerify,
    ];

    /// CLI name of the scenario
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::GoogleAuth => "google-auth",
            Self::CreateSession => "create-session",
            Self::ListSessions => "list-sessions",
            Self::DeleteSession => "delete-session",
            Self::ChatMessage => "chat-message",
            Self::Feedback => "feedback",
            Self::BlockchainVerify => "blockchain-verify",
        }
    }

    /// One-line description shown by `smoketest list`
    pub fn description(self) -> &'static str {
        match self {
            Self::Login => "log in with the configured credentials and expect a token",
            Self::GoogleAuth => "sign in through the Google OAuth endpoint and expect a token",
            Self::CreateSession => "create a session and verify every field is echoed back",
            Self::ListSessions => "list sessions and verify each entry carries an identifier",
            Self::DeleteSession => "delete a freshly created session and verify it is gone",
            Self::ChatMessage => "send a chat message and verify text and session are echoed",
            Self::Feedback => "submit feedback and verify rating and comment are echoed",
            Self::BlockchainVerify => "verify a skill completion on chain and expect issued tokens",
        }
    }

    /// Look up a scenario by its CLI name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Scenario::parse("login"), Some(Scenario::Login));
        assert_eq!(
            Scenario::parse("blockchain-verify"),
            Some(Scenario::BlockchainVerify)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(Scenario::parse("does-not-exist"), None);
        assert_eq!(Scenario::parse("Login"), None);
    }

    #[test]
    fn test_names_are_unique() {
        for a in Scenario::ALL {
            for b in Scenario::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn test_every_scenario_parses_back() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::parse(scenario.name()), Some(scenario));
        }
    }
}
