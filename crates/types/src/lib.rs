use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How roles from the identity provider are reconciled with the roles
/// already stored on a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleManagement {
    /// Roles are assigned once when the user record is first created.
    #[default]
    SetOnInsert,
    /// Provider roles are merged into the existing set on every login.
    Merge,
    /// Provider roles replace the existing set on every login.
    Overwrite,
}

impl RoleManagement {
    /// The fixed option set, in the order it is presented.
    pub const ALL: [RoleManagement; 3] = [
        RoleManagement::SetOnInsert,
        RoleManagement::Merge,
        RoleManagement::Overwrite,
    ];

    /// Human-readable label for the select widget.
    pub fn label(&self) -> &'static str {
        match self {
            RoleManagement::SetOnInsert => "Set on insert",
            RoleManagement::Merge => "Merge",
            RoleManagement::Overwrite => "Overwrite",
        }
    }

    /// The next option, wrapping at the end of the set.
    pub fn cycle_right(&self) -> RoleManagement {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous option, wrapping at the start of the set.
    pub fn cycle_left(&self) -> RoleManagement {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Variant-specific connection settings, tagged by the `type` discriminant
/// on the wire.
///
/// OneLogin and Okta carry the same field names but are presented with
/// different labels, so they stay separate variants rather than sharing a
/// sub-shape. Records with a discriminant this build does not know about
/// deserialize as `Unknown` and keep only their common fields editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderKind {
    Google {
        #[serde(default)]
        domain: String,
    },
    OneLogin {
        #[serde(default)]
        issuer_url: String,
        #[serde(default)]
        saml_url: String,
        #[serde(default)]
        saml_cert: String,
    },
    Okta {
        #[serde(default)]
        saml_url: String,
        #[serde(default)]
        issuer_url: String,
        #[serde(default)]
        saml_cert: String,
    },
    #[serde(other)]
    Unknown,
}

impl ProviderKind {
    /// Display title for the editor card; empty for unrecognized kinds.
    pub fn title(&self) -> &'static str {
        match self {
            ProviderKind::Google { .. } => "Google",
            ProviderKind::OneLogin { .. } => "OneLogin",
            ProviderKind::Okta { .. } => "Okta",
            ProviderKind::Unknown => "",
        }
    }
}

/// Selector for the provider kinds a user can create. Unlike
/// `ProviderKind` this carries no field payload and never names `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    Google,
    OneLogin,
    Okta,
}

impl ProviderType {
    pub const ALL: [ProviderType; 3] = [
        ProviderType::Google,
        ProviderType::OneLogin,
        ProviderType::Okta,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProviderType::Google => "Google",
            ProviderType::OneLogin => "OneLogin",
            ProviderType::Okta => "Okta",
        }
    }

    /// Wire discriminant for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Google => "google",
            ProviderType::OneLogin => "onelogin",
            ProviderType::Okta => "okta",
        }
    }

    /// A blank variant payload for a freshly created record.
    pub fn blank_kind(&self) -> ProviderKind {
        match self {
            ProviderType::Google => ProviderKind::Google {
                domain: String::new(),
            },
            ProviderType::OneLogin => ProviderKind::OneLogin {
                issuer_url: String::new(),
                saml_url: String::new(),
                saml_cert: String::new(),
            },
            ProviderType::Okta => ProviderKind::Okta {
                saml_url: String::new(),
                issuer_url: String::new(),
                saml_cert: String::new(),
            },
        }
    }
}

impl FromStr for ProviderType {
    type Err = ParseProviderTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(ProviderType::Google),
            "onelogin" => Ok(ProviderType::OneLogin),
            "okta" => Ok(ProviderType::Okta),
            _ => Err(ParseProviderTypeError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseProviderTypeError;

impl fmt::Display for ParseProviderTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid provider type; expected 'google', 'onelogin' or 'okta'")
    }
}

impl Error for ParseProviderTypeError {}

/// One identity-provider configuration record.
///
/// The `kind` payload is flattened so a record serializes flat with a
/// `type` tag next to the common fields. All mutation goes through the
/// `with_*` primitives below: each produces a new record with exactly one
/// field replaced, so holders of the previous value can rely on structural
/// diffing for change detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Opaque identifier; empty until the record has been persisted by a
    /// backend that assigns ids.
    #[serde(default)]
    pub id: String,
    /// Display name, free text.
    #[serde(default)]
    pub label: String,
    /// Role names granted by default. Kept sorted and duplicate-free by the
    /// editor's add commit.
    #[serde(default)]
    pub default_roles: Vec<String>,
    /// Create a user record on first authentication.
    #[serde(default)]
    pub auto_create: bool,
    #[serde(default)]
    pub role_management: RoleManagement,
    #[serde(flatten)]
    pub kind: ProviderKind,
}

impl Provider {
    /// A fresh blank record of the given kind, never persisted (empty id).
    pub fn new(provider_type: ProviderType) -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            default_roles: Vec::new(),
            auto_create: false,
            role_management: RoleManagement::default(),
            kind: provider_type.blank_kind(),
        }
    }

    pub fn with_label(&self, label: impl Into<String>) -> Provider {
        let mut next = self.clone();
        next.label = label.into();
        next
    }

    pub fn with_default_roles(&self, default_roles: Vec<String>) -> Provider {
        let mut next = self.clone();
        next.default_roles = default_roles;
        next
    }

    pub fn with_auto_create(&self, auto_create: bool) -> Provider {
        let mut next = self.clone();
        next.auto_create = auto_create;
        next
    }

    pub fn with_role_management(&self, role_management: RoleManagement) -> Provider {
        let mut next = self.clone();
        next.role_management = role_management;
        next
    }

    /// Replace the Google match domain. A no-op clone for any other kind;
    /// variant fields are never written through a mismatched record.
    pub fn with_domain(&self, domain: impl Into<String>) -> Provider {
        let mut next = self.clone();
        if let ProviderKind::Google { domain: value } = &mut next.kind {
            *value = domain.into();
        }
        next
    }

    pub fn with_issuer_url(&self, issuer_url: impl Into<String>) -> Provider {
        let mut next = self.clone();
        match &mut next.kind {
            ProviderKind::OneLogin {
                issuer_url: value, ..
            }
            | ProviderKind::Okta {
                issuer_url: value, ..
            } => *value = issuer_url.into(),
            _ => {}
        }
        next
    }

    pub fn with_saml_url(&self, saml_url: impl Into<String>) -> Provider {
        let mut next = self.clone();
        match &mut next.kind {
            ProviderKind::OneLogin {
                saml_url: value, ..
            }
            | ProviderKind::Okta {
                saml_url: value, ..
            } => *value = saml_url.into(),
            _ => {}
        }
        next
    }

    pub fn with_saml_cert(&self, saml_cert: impl Into<String>) -> Provider {
        let mut next = self.clone();
        match &mut next.kind {
            ProviderKind::OneLogin {
                saml_cert: value, ..
            }
            | ProviderKind::Okta {
                saml_cert: value, ..
            } => *value = saml_cert.into(),
            _ => {}
        }
        next
    }
}

/// Modal overlays the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Confirm removal of the selected provider record.
    ConfirmRemove,
    /// Pick the kind for a new provider record.
    AddProvider,
}

/// Side effects reported by components for the runtime to process.
///
/// Components never modify the provider collection directly; the list owner
/// applies these after the originating event handler has returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The editor produced a replacement for the selected record.
    ReplaceProvider(Box<Provider>),
    /// The editor's remove button was activated; the list owner decides
    /// whether to confirm.
    RemoveProviderRequested,
    /// Removal was confirmed; excise the selected record.
    RemoveProviderConfirmed,
    /// Append a fresh blank record of the given kind and select it.
    AddProvider(ProviderType),
    /// Persist the provider list through the settings store.
    SaveRequested,
    /// Display a modal overlay.
    ShowModal(Modal),
    /// Hide any open modal.
    CloseModal,
    /// Leave the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_serializes_flat_with_type_tag() {
        let provider = Provider {
            id: "5a1b".into(),
            label: "Corp SSO".into(),
            default_roles: vec!["viewer".into()],
            auto_create: true,
            role_management: RoleManagement::Merge,
            kind: ProviderKind::Google {
                domain: "example.com".into(),
            },
        };

        let value = serde_json::to_value(&provider).expect("serialize Provider");
        assert_eq!(value["type"], "google");
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["label"], "Corp SSO");
        assert_eq!(value["role_management"], "merge");

        let back: Provider = serde_json::from_value(value).expect("round-trip Provider");
        assert_eq!(back, provider);
    }

    #[test]
    fn unrecognized_type_deserializes_as_unknown() {
        let json = r#"{
            "id": "x",
            "label": "Legacy",
            "default_roles": [],
            "auto_create": false,
            "role_management": "overwrite",
            "type": "azure"
        }"#;
        let provider: Provider = serde_json::from_str(json).expect("deserialize Provider");
        assert_eq!(provider.kind, ProviderKind::Unknown);
        assert_eq!(provider.kind.title(), "");
        assert_eq!(provider.label, "Legacy");
    }

    #[test]
    fn with_label_replaces_exactly_one_field() {
        let provider = Provider::new(ProviderType::OneLogin);
        let next = provider.with_label("Corp SSO");
        assert_eq!(next.label, "Corp SSO");
        assert_eq!(next.id, provider.id);
        assert_eq!(next.default_roles, provider.default_roles);
        assert_eq!(next.auto_create, provider.auto_create);
        assert_eq!(next.role_management, provider.role_management);
        assert_eq!(next.kind, provider.kind);
        // the input record is untouched
        assert_eq!(provider.label, "");
    }

    #[test]
    fn with_domain_is_a_no_op_for_other_kinds() {
        let provider = Provider::new(ProviderType::Okta).with_issuer_url("https://issuer");
        let next = provider.with_domain("example.com");
        assert_eq!(next, provider);
    }

    #[test]
    fn with_issuer_url_never_touches_google() {
        let provider = Provider::new(ProviderType::Google).with_domain("example.com");
        let next = provider.with_issuer_url("https://issuer");
        assert_eq!(next, provider);
    }

    #[test]
    fn okta_and_onelogin_keep_separate_shapes() {
        let onelogin = Provider::new(ProviderType::OneLogin).with_saml_cert("PEM");
        let okta = Provider::new(ProviderType::Okta).with_saml_cert("PEM");
        assert_ne!(onelogin.kind, okta.kind);
        let ol = serde_json::to_value(&onelogin).expect("serialize");
        let ok = serde_json::to_value(&okta).expect("serialize");
        assert_eq!(ol["type"], "onelogin");
        assert_eq!(ok["type"], "okta");
        assert_eq!(ol["saml_cert"], "PEM");
        assert_eq!(ok["saml_cert"], "PEM");
    }

    #[test]
    fn role_management_cycles_through_fixed_option_set() {
        let mut m = RoleManagement::SetOnInsert;
        m = m.cycle_right();
        assert_eq!(m, RoleManagement::Merge);
        m = m.cycle_right();
        assert_eq!(m, RoleManagement::Overwrite);
        m = m.cycle_right();
        assert_eq!(m, RoleManagement::SetOnInsert);
        assert_eq!(m.cycle_left(), RoleManagement::Overwrite);
    }

    #[test]
    fn provider_type_parses_wire_names() {
        assert_eq!("google".parse::<ProviderType>(), Ok(ProviderType::Google));
        assert_eq!("onelogin".parse::<ProviderType>(), Ok(ProviderType::OneLogin));
        assert_eq!("okta".parse::<ProviderType>(), Ok(ProviderType::Okta));
        assert!("azure".parse::<ProviderType>().is_err());
    }
}
