/*
[INPUT]:  HTTP method, path template and accepted statuses per IHL operation
[OUTPUT]: Endpoint declarations and status checks
[POS]:    HTTP layer - per-operation status allow-lists
[UPDATE]: When an endpoint is added or its accepted statuses change
*/

use reqwest::{Method, StatusCode};

use crate::http::{IhlError, Result};

/// Which response statuses count as success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any 2xx
    Success,
    /// Exactly these codes
    Only(&'static [u16]),
}

impl StatusPolicy {
    pub fn accepts(&self, status: StatusCode) -> bool {
        match self {
            StatusPolicy::Success => status.is_success(),
            StatusPolicy::Only(codes) => codes.contains(&status.as_u16()),
        }
    }
}

/// One IHL operation
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: Method,
    /// Path with placeholders, used in error messages
    pub path: &'static str,
    pub policy: StatusPolicy,
}

impl Endpoint {
    pub const fn new(method: Method, path: &'static str, policy: StatusPolicy) -> Self {
        Self {
            method,
            path,
            policy,
        }
    }

    /// Label used in logs and errors, e.g. `IHL GET /account/bank-account`
    pub fn operation(&self) -> String {
        format!("IHL {} {}", self.method, self.path)
    }

    pub fn check(&self, status: StatusCode) -> Result<()> {
        if self.policy.accepts(status) {
            Ok(())
        } else {
            Err(IhlError::status(self.operation(), status))
        }
    }
}

pub const COMPLIANCE_CHECK_STATUS: Endpoint = Endpoint::new(
    Method::GET,
    "/account/:accountAddress/compliance-check-status",
    StatusPolicy::Success,
);

pub const BANK_ACCOUNTS_LIST: Endpoint =
    Endpoint::new(Method::GET, "/account/bank-account", StatusPolicy::Success);

pub const BANK_ACCOUNT_DELETE: Endpoint =
    Endpoint::new(Method::DELETE, "/account/bank-account", StatusPolicy::Success);

pub const BANK_ACCOUNT_CREATE: Endpoint =
    Endpoint::new(Method::POST, "/account/bank-account", StatusPolicy::Success);

pub const PLAID_ACCESS_TOKEN_EXCHANGE: Endpoint = Endpoint::new(
    Method::POST,
    "/plaid/access-token/exchange",
    StatusPolicy::Success,
);

pub const PLAID_LINK_TOKEN_CREATE: Endpoint = Endpoint::new(
    Method::POST,
    "/plaid/link-token/create",
    StatusPolicy::Success,
);

/// 409 means the account already exists
pub const PERSONA_ACCOUNT_CREATE: Endpoint = Endpoint::new(
    Method::POST,
    "/persona/account/create",
    StatusPolicy::Only(&[201, 409]),
);
