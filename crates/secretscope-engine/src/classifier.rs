//! Identity classification: mapping a CloudTrail user identity onto a
//! human/machine category and a concrete identity-type label.
//!
//! The decision logic is an ordered rule table evaluated top-to-bottom,
//! first match wins. Order is load-bearing: the EC2-instance-id shape
//! check fires before the service-linked-role check, so an instance whose
//! issuer ARN also contains `/aws-service-role` classifies as an EC2
//! instance. Changing rule order silently changes classification
//! outcomes; the order here is pinned by tests.

use secretscope_core::{ConsumerCategory, IdentityKind, UserIdentity};

const EKS_OIDC_MARKER: &str = "oidc.eks.";
const EC2_INSTANCE_PREFIX: &str = "i-";
const SERVICE_LINKED_ROLE_SEGMENT: &str = "/aws-service-role";
const STS_ASSUMED_ROLE_MARKER: &str = "sts.amazonaws.com:assumed-role";
const WEB_IDENTITY_MARKER: &str = "WebIdentity";
const SSO_RESERVED_ROLE_MARKER: &str = "AWSReservedSSO";
const IAM_USER_PATH: &str = ":user/";
const IAM_ROLE_PATH: &str = ":role/";

/// The outcome of classifying one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: ConsumerCategory,
    pub label: &'static str,
}

/// Pre-resolved inputs the rule predicates operate on. Optional chains
/// are flattened to `""` so predicates stay simple substring checks.
struct IdentityView<'a> {
    kind: &'a IdentityKind,
    arn: &'a str,
    entity_id: &'a str,
    issuer_arn: &'a str,
    federated_provider: &'a str,
}

struct Rule {
    category: ConsumerCategory,
    label: &'static str,
    applies: fn(&IdentityView<'_>) -> bool,
}

// ── Rule table ───────────────────────────────────────────────────────────────

const RULES: &[Rule] = &[
    Rule {
        category: ConsumerCategory::Machine,
        label: "AWS EKS Service Account",
        applies: |id| id.federated_provider.contains(EKS_OIDC_MARKER),
    },
    Rule {
        category: ConsumerCategory::Machine,
        label: "AWS EC2 Instance",
        applies: |id| id.entity_id.starts_with(EC2_INSTANCE_PREFIX),
    },
    Rule {
        category: ConsumerCategory::Machine,
        label: "AWS Service",
        applies: |id| {
            *id.kind == IdentityKind::AwsService
                || id.issuer_arn.contains(SERVICE_LINKED_ROLE_SEGMENT)
        },
    },
    Rule {
        category: ConsumerCategory::Human,
        label: "Web Identity User",
        applies: |id| {
            *id.kind == IdentityKind::WebIdentityUser
                || (id.arn.contains(STS_ASSUMED_ROLE_MARKER)
                    && id.arn.contains(WEB_IDENTITY_MARKER))
        },
    },
    Rule {
        category: ConsumerCategory::Human,
        label: "AWS SAML User",
        applies: |id| {
            *id.kind == IdentityKind::SamlUser || id.arn.contains(SSO_RESERVED_ROLE_MARKER)
        },
    },
    Rule {
        category: ConsumerCategory::Human,
        label: "AWS IAM User",
        applies: |id| *id.kind == IdentityKind::IamUser || id.arn.contains(IAM_USER_PATH),
    },
    Rule {
        category: ConsumerCategory::Machine,
        label: "AWS IAM Role",
        applies: |id| *id.kind == IdentityKind::IamRole || id.arn.contains(IAM_ROLE_PATH),
    },
    Rule {
        category: ConsumerCategory::Human,
        label: "AWS Federated User",
        applies: |id| *id.kind == IdentityKind::FederatedUser,
    },
    // Fallback: anything not recognized above is an automated actor.
    Rule {
        category: ConsumerCategory::Machine,
        label: "Application",
        applies: |_| true,
    },
];

/// Classify an identity. Total: every input yields exactly one
/// classification, falling back to Machine / "Application".
pub fn classify(identity: &UserIdentity) -> Classification {
    let view = IdentityView {
        kind: &identity.kind,
        arn: &identity.arn,
        entity_id: resolved_entity_id(&identity.principal_id),
        issuer_arn: identity.session_issuer_arn(),
        federated_provider: identity.federated_provider(),
    };

    for rule in RULES {
        if (rule.applies)(&view) {
            return Classification {
                category: rule.category,
                label: rule.label,
            };
        }
    }

    // The final table row is always-true, so the loop always returns.
    unreachable!()
}

/// Resolve the acting entity id from a principal id.
///
/// Assumed-role principal ids are compound `<roleId>:<sessionName>`
/// strings; the session name is the acting entity (an instance id, a
/// username, ...). Plain principal ids pass through unchanged.
pub fn resolved_entity_id(principal_id: &str) -> &str {
    let mut parts = principal_id.split(':');
    match (parts.next(), parts.next()) {
        (Some(_), Some(session)) => session,
        _ => principal_id,
    }
}
