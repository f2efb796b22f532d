//! The CloudTrail `userIdentity` record and its nested session structures.
//!
//! Every level of the session chain (`sessionContext`, `sessionIssuer`,
//! `webIdFederationData`) is an `Option` of a dedicated struct, so an
//! assumed-role identity arriving without a session context is a distinct,
//! representable state rather than a pile of empty strings.

use serde::{Deserialize, Serialize};

/// The `type` tag of a CloudTrail user identity.
///
/// Unknown or absent tags deserialize into `Other` so that parsing never
/// fails on vocabulary CloudTrail adds later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IdentityKind {
    AssumedRole,
    IamRole,
    IamUser,
    AwsService,
    WebIdentityUser,
    SamlUser,
    FederatedUser,
    Other(String),
}

impl IdentityKind {
    /// The wire spelling used by CloudTrail.
    pub fn as_wire_str(&self) -> &str {
        match self {
            Self::AssumedRole => "AssumedRole",
            Self::IamRole => "IAMRole",
            Self::IamUser => "IAMUser",
            Self::AwsService => "AWSService",
            Self::WebIdentityUser => "WebIdentityUser",
            Self::SamlUser => "SAMLUser",
            Self::FederatedUser => "FederatedUser",
            Self::Other(s) => s,
        }
    }

    /// Role-backed identities carry their actor in the session context.
    pub fn is_role(&self) -> bool {
        matches!(self, Self::AssumedRole | Self::IamRole)
    }
}

impl Default for IdentityKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for IdentityKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AssumedRole" => Self::AssumedRole,
            "IAMRole" => Self::IamRole,
            "IAMUser" => Self::IamUser,
            "AWSService" => Self::AwsService,
            "WebIdentityUser" => Self::WebIdentityUser,
            "SAMLUser" => Self::SamlUser,
            "FederatedUser" => Self::FederatedUser,
            _ => Self::Other(s),
        }
    }
}

impl From<IdentityKind> for String {
    fn from(kind: IdentityKind) -> Self {
        kind.as_wire_str().to_string()
    }
}

/// The acting identity embedded in a CloudTrail event body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserIdentity {
    #[serde(rename = "type")]
    pub kind: IdentityKind,
    /// Possibly a compound `<roleOrUserId>:<sessionName>` string.
    pub principal_id: String,
    pub arn: String,
    pub account_id: String,
    pub user_name: String,
    pub access_key_id: String,
    pub invoked_by: String,
    pub identity_provider: String,
    pub session_context: Option<SessionContext>,
}

/// Session details for temporary credentials (assumed roles, federation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionContext {
    pub attributes: Option<SessionAttributes>,
    pub session_issuer: Option<SessionIssuer>,
    pub ec2_role_delivery: String,
    pub web_id_federation_data: Option<WebIdFederationData>,
}

/// The role or user that granted a temporary session its credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionIssuer {
    #[serde(rename = "type")]
    pub kind: String,
    pub principal_id: String,
    pub arn: String,
    pub account_id: String,
    pub user_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionAttributes {
    pub mfa_authenticated: String,
    pub creation_date: Option<jiff::Timestamp>,
}

/// Web-identity federation details (OIDC providers, EKS IRSA, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebIdFederationData {
    pub federated_provider: String,
    pub attributes: Option<FederationAttributes>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FederationAttributes {
    pub app_id: String,
    pub user_id: String,
}

impl UserIdentity {
    /// ARN of the session issuer, or `""` when any link of the optional
    /// chain is absent.
    pub fn session_issuer_arn(&self) -> &str {
        self.session_context
            .as_ref()
            .and_then(|ctx| ctx.session_issuer.as_ref())
            .map(|issuer| issuer.arn.as_str())
            .unwrap_or("")
    }

    /// Federated provider string, or `""` when absent.
    pub fn federated_provider(&self) -> &str {
        self.session_context
            .as_ref()
            .and_then(|ctx| ctx.web_id_federation_data.as_ref())
            .map(|fed| fed.federated_provider.as_str())
            .unwrap_or("")
    }
}
