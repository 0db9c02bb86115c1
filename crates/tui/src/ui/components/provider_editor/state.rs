use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use ssopanel_types::{Provider, ProviderKind, RoleManagement};

use crate::ui::components::common::TextInputState;

/// Identifies one editable text field of the form. The non-text widgets
/// (role badges, buttons, toggle, select) are addressed through their focus
/// flags directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Label,
    Domain,
    IssuerUrl,
    SamlUrl,
    SamlCert,
}

/// A single edit applied against the selected provider record.
///
/// Actions never mutate in place; [`ProviderEditorState::apply`] turns them
/// into a full replacement record, or `None` when the action does not apply.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    SetLabel(String),
    SetDomain(String),
    SetIssuerUrl(String),
    SetSamlUrl(String),
    SetSamlCert(String),
    ToggleAutoCreate,
    SetRoleManagement(RoleManagement),
    /// Commit the add-role buffer into `default_roles`.
    SubmitRole,
    RemoveRole(String),
}

/// State for the provider editor form.
///
/// Holds only editing scaffolding: focus flags, the transient add-role
/// buffer, a mirror of the text field currently under the cursor, and the
/// list of variant-specific fields. The record itself stays with the list
/// owner and flows through here by value.
#[derive(Debug, Default)]
pub struct ProviderEditorState {
    pub f_label: FocusFlag,
    pub f_roles: FocusFlag,
    pub f_add_role: FocusFlag,
    pub f_add_button: FocusFlag,
    pub f_auto_create: FocusFlag,
    pub f_role_management: FocusFlag,
    pub f_domain: FocusFlag,
    pub f_issuer_url: FocusFlag,
    pub f_saml_url: FocusFlag,
    pub f_saml_cert: FocusFlag,
    pub f_remove_button: FocusFlag,
    container: FocusFlag,

    /// Buffer for the role being typed; cleared whenever a commit fires or
    /// a different record is attached.
    add_role: TextInputState,
    /// Mirror of the text field currently being edited.
    field_input: TextInputState,
    active_field: Option<EditorField>,
    selected_role: usize,
    variant_fields: &'static [EditorField],
}

impl ProviderEditorState {
    /// Point the editor at a record: pick the variant's field set and drop
    /// all transient editing state.
    pub fn attach(&mut self, provider: &Provider) {
        self.variant_fields = Self::text_fields(&provider.kind);
        self.add_role.clear();
        self.field_input.clear();
        self.active_field = None;
        self.selected_role = 0;
    }

    /// The variant-specific text fields, in display order.
    pub fn text_fields(kind: &ProviderKind) -> &'static [EditorField] {
        match kind {
            ProviderKind::Google { .. } => &[EditorField::Domain],
            ProviderKind::OneLogin { .. } => &[
                EditorField::IssuerUrl,
                EditorField::SamlUrl,
                EditorField::SamlCert,
            ],
            ProviderKind::Okta { .. } => &[
                EditorField::SamlUrl,
                EditorField::IssuerUrl,
                EditorField::SamlCert,
            ],
            ProviderKind::Unknown => &[],
        }
    }

    pub fn variant_fields(&self) -> &'static [EditorField] {
        self.variant_fields
    }

    /// Current value of a text field on the given record, if the record's
    /// variant carries it.
    pub fn field_value<'a>(provider: &'a Provider, field: EditorField) -> Option<&'a str> {
        match field {
            EditorField::Label => Some(&provider.label),
            EditorField::Domain => match &provider.kind {
                ProviderKind::Google { domain } => Some(domain),
                _ => None,
            },
            EditorField::IssuerUrl => match &provider.kind {
                ProviderKind::OneLogin { issuer_url, .. } | ProviderKind::Okta { issuer_url, .. } => Some(issuer_url),
                _ => None,
            },
            EditorField::SamlUrl => match &provider.kind {
                ProviderKind::OneLogin { saml_url, .. } | ProviderKind::Okta { saml_url, .. } => Some(saml_url),
                _ => None,
            },
            EditorField::SamlCert => match &provider.kind {
                ProviderKind::OneLogin { saml_cert, .. } | ProviderKind::Okta { saml_cert, .. } => Some(saml_cert),
                _ => None,
            },
        }
    }

    /// The action writing the given text field.
    pub fn text_action(field: EditorField, value: String) -> EditorAction {
        match field {
            EditorField::Label => EditorAction::SetLabel(value),
            EditorField::Domain => EditorAction::SetDomain(value),
            EditorField::IssuerUrl => EditorAction::SetIssuerUrl(value),
            EditorField::SamlUrl => EditorAction::SetSamlUrl(value),
            EditorField::SamlCert => EditorAction::SetSamlCert(value),
        }
    }

    pub fn flag(&self, field: EditorField) -> &FocusFlag {
        match field {
            EditorField::Label => &self.f_label,
            EditorField::Domain => &self.f_domain,
            EditorField::IssuerUrl => &self.f_issuer_url,
            EditorField::SamlUrl => &self.f_saml_url,
            EditorField::SamlCert => &self.f_saml_cert,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.container.get()
    }

    pub fn add_role(&self) -> &TextInputState {
        &self.add_role
    }

    pub fn add_role_mut(&mut self) -> &mut TextInputState {
        &mut self.add_role
    }

    pub fn field_input(&self) -> &TextInputState {
        &self.field_input
    }

    pub fn field_input_mut(&mut self) -> &mut TextInputState {
        &mut self.field_input
    }

    pub fn active_field(&self) -> Option<EditorField> {
        self.active_field
    }

    /// Ensure the field mirror tracks the given field, loading the record's
    /// current value when the focus has moved since the last edit.
    pub fn sync_field_input(&mut self, field: EditorField, value: &str) {
        if self.active_field != Some(field) {
            self.field_input.load(value);
            self.active_field = Some(field);
        }
    }

    pub fn selected_role(&self) -> usize {
        self.selected_role
    }

    pub fn select_next_role(&mut self, count: usize) {
        if count > 0 && self.selected_role + 1 < count {
            self.selected_role += 1;
        }
    }

    pub fn select_prev_role(&mut self) {
        self.selected_role = self.selected_role.saturating_sub(1);
    }

    /// Reduce an action against the given record into its replacement.
    ///
    /// Returns `None` when the action does not apply: a variant field edit
    /// against a record of another variant, an empty add-role buffer, or
    /// removal of a role the record does not carry. The caller treats `None`
    /// as "emit nothing".
    pub fn apply(&mut self, provider: &Provider, action: EditorAction) -> Option<Provider> {
        match action {
            EditorAction::SetLabel(label) => Some(provider.with_label(label)),
            EditorAction::SetDomain(domain) => match provider.kind {
                ProviderKind::Google { .. } => Some(provider.with_domain(domain)),
                _ => None,
            },
            EditorAction::SetIssuerUrl(issuer_url) => match provider.kind {
                ProviderKind::OneLogin { .. } | ProviderKind::Okta { .. } => {
                    Some(provider.with_issuer_url(issuer_url))
                }
                _ => None,
            },
            EditorAction::SetSamlUrl(saml_url) => match provider.kind {
                ProviderKind::OneLogin { .. } | ProviderKind::Okta { .. } => {
                    Some(provider.with_saml_url(saml_url))
                }
                _ => None,
            },
            EditorAction::SetSamlCert(saml_cert) => match provider.kind {
                ProviderKind::OneLogin { .. } | ProviderKind::Okta { .. } => {
                    Some(provider.with_saml_cert(saml_cert))
                }
                _ => None,
            },
            EditorAction::ToggleAutoCreate => Some(provider.with_auto_create(!provider.auto_create)),
            EditorAction::SetRoleManagement(mode) => Some(provider.with_role_management(mode)),
            EditorAction::SubmitRole => {
                let role = self.add_role.input().trim().to_string();
                if role.is_empty() {
                    return None;
                }
                let mut roles = provider.default_roles.clone();
                if !roles.contains(&role) {
                    roles.push(role);
                }
                roles.sort();
                self.add_role.clear();
                Some(provider.with_default_roles(roles))
            }
            EditorAction::RemoveRole(role) => {
                let index = provider.default_roles.iter().position(|r| *r == role)?;
                let mut roles = provider.default_roles.clone();
                roles.remove(index);
                self.selected_role = self.selected_role.min(roles.len().saturating_sub(1));
                Some(provider.with_default_roles(roles))
            }
        }
    }
}

impl HasFocus for ProviderEditorState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_label);
        builder.leaf_widget(&self.f_roles);
        builder.leaf_widget(&self.f_add_role);
        builder.leaf_widget(&self.f_add_button);
        builder.leaf_widget(&self.f_auto_create);
        builder.leaf_widget(&self.f_role_management);
        for field in self.variant_fields {
            builder.leaf_widget(self.flag(*field));
        }
        builder.leaf_widget(&self.f_remove_button);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssopanel_types::ProviderType;

    fn onelogin() -> Provider {
        Provider::new(ProviderType::OneLogin)
    }

    fn editor_for(provider: &Provider) -> ProviderEditorState {
        let mut editor = ProviderEditorState::default();
        editor.attach(provider);
        editor
    }

    fn type_role(editor: &mut ProviderEditorState, role: &str) {
        for c in role.chars() {
            editor.add_role_mut().insert_char(c);
        }
    }

    #[test]
    fn set_label_touches_only_the_label() {
        let provider = onelogin()
            .with_issuer_url("https://app.onelogin.com/saml/metadata/1")
            .with_auto_create(true);
        let mut editor = editor_for(&provider);

        let next = editor
            .apply(&provider, EditorAction::SetLabel("Corp SSO".to_string()))
            .unwrap();

        assert_eq!(next.label, "Corp SSO");
        assert_eq!(next.kind, provider.kind);
        assert_eq!(next.auto_create, provider.auto_create);
        assert_eq!(next.default_roles, provider.default_roles);
    }

    #[test]
    fn submit_role_appends_sorted_and_clears_the_buffer() {
        let provider = onelogin()
            .with_label("Corp SSO")
            .with_default_roles(vec!["viewer".to_string()])
            .with_role_management(RoleManagement::Merge);
        let mut editor = editor_for(&provider);
        type_role(&mut editor, "admin");

        let next = editor.apply(&provider, EditorAction::SubmitRole).unwrap();

        assert_eq!(next.default_roles, vec!["admin", "viewer"]);
        assert_eq!(next.label, provider.label);
        assert_eq!(next.kind, provider.kind);
        assert_eq!(next.auto_create, provider.auto_create);
        assert_eq!(next.role_management, provider.role_management);
        assert!(editor.add_role().input().is_empty());
        // Source record is untouched.
        assert_eq!(provider.default_roles, vec!["viewer"]);
    }

    #[test]
    fn remove_last_role_leaves_an_empty_list() {
        let provider = onelogin()
            .with_label("Corp SSO")
            .with_default_roles(vec!["viewer".to_string()]);
        let mut editor = editor_for(&provider);

        let next = editor
            .apply(&provider, EditorAction::RemoveRole("viewer".to_string()))
            .unwrap();

        assert!(next.default_roles.is_empty());
        assert_eq!(next.label, provider.label);
    }

    #[test]
    fn repeated_commits_keep_roles_sorted_and_unique() {
        let mut provider = onelogin();
        let mut editor = editor_for(&provider);
        for role in ["zeta", "alpha", "mid", "alpha"] {
            type_role(&mut editor, role);
            if let Some(next) = editor.apply(&provider, EditorAction::SubmitRole) {
                provider = next;
            }
        }
        assert_eq!(provider.default_roles, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn submit_duplicate_role_emits_unchanged_list_and_clears_buffer() {
        let provider = onelogin().with_default_roles(vec!["admin".to_string(), "viewer".to_string()]);
        let mut editor = editor_for(&provider);
        type_role(&mut editor, "admin");

        let next = editor.apply(&provider, EditorAction::SubmitRole).unwrap();

        assert_eq!(next.default_roles, vec!["admin", "viewer"]);
        assert!(editor.add_role().input().is_empty());
    }

    #[test]
    fn submit_with_blank_buffer_emits_nothing() {
        let provider = onelogin();
        let mut editor = editor_for(&provider);
        assert_eq!(editor.apply(&provider, EditorAction::SubmitRole), None);

        type_role(&mut editor, "   ");
        assert_eq!(editor.apply(&provider, EditorAction::SubmitRole), None);
    }

    #[test]
    fn remove_role_excises_only_the_named_role() {
        let provider = onelogin().with_default_roles(vec![
            "admin".to_string(),
            "auditor".to_string(),
            "viewer".to_string(),
        ]);
        let mut editor = editor_for(&provider);

        let next = editor
            .apply(&provider, EditorAction::RemoveRole("auditor".to_string()))
            .unwrap();

        assert_eq!(next.default_roles, vec!["admin", "viewer"]);
    }

    #[test]
    fn remove_absent_role_emits_nothing() {
        let provider = onelogin().with_default_roles(vec!["viewer".to_string()]);
        let mut editor = editor_for(&provider);
        assert_eq!(
            editor.apply(&provider, EditorAction::RemoveRole("admin".to_string())),
            None
        );
    }

    #[test]
    fn remove_role_clamps_the_badge_selection() {
        let provider = onelogin().with_default_roles(vec!["admin".to_string(), "viewer".to_string()]);
        let mut editor = editor_for(&provider);
        editor.select_next_role(2);
        assert_eq!(editor.selected_role(), 1);

        editor
            .apply(&provider, EditorAction::RemoveRole("viewer".to_string()))
            .unwrap();
        assert_eq!(editor.selected_role(), 0);
    }

    #[test]
    fn variant_fields_follow_the_record_kind() {
        assert_eq!(
            ProviderEditorState::text_fields(&Provider::new(ProviderType::Google).kind),
            &[EditorField::Domain]
        );
        assert_eq!(
            ProviderEditorState::text_fields(&Provider::new(ProviderType::OneLogin).kind),
            &[EditorField::IssuerUrl, EditorField::SamlUrl, EditorField::SamlCert]
        );
        assert_eq!(
            ProviderEditorState::text_fields(&Provider::new(ProviderType::Okta).kind),
            &[EditorField::SamlUrl, EditorField::IssuerUrl, EditorField::SamlCert]
        );
        assert_eq!(ProviderEditorState::text_fields(&ProviderKind::Unknown), &[]);
    }

    #[test]
    fn variant_field_edits_do_not_cross_variants() {
        let google = Provider::new(ProviderType::Google);
        let okta = Provider::new(ProviderType::Okta);
        let mut editor = editor_for(&google);

        assert_eq!(
            editor.apply(&google, EditorAction::SetIssuerUrl("https://idp".to_string())),
            None
        );
        assert_eq!(
            editor.apply(&google, EditorAction::SetSamlCert("cert".to_string())),
            None
        );
        editor.attach(&okta);
        assert_eq!(
            editor.apply(&okta, EditorAction::SetDomain("example.com".to_string())),
            None
        );
    }

    #[test]
    fn toggle_and_role_management_round_trip() {
        let provider = Provider::new(ProviderType::Google);
        let mut editor = editor_for(&provider);

        let toggled = editor.apply(&provider, EditorAction::ToggleAutoCreate).unwrap();
        assert!(toggled.auto_create);
        let back = editor.apply(&toggled, EditorAction::ToggleAutoCreate).unwrap();
        assert!(!back.auto_create);

        let merged = editor
            .apply(&provider, EditorAction::SetRoleManagement(RoleManagement::Merge))
            .unwrap();
        assert_eq!(merged.role_management, RoleManagement::Merge);
    }

    #[test]
    fn attach_resets_transient_editing_state() {
        let provider = onelogin();
        let mut editor = editor_for(&provider);
        type_role(&mut editor, "adm");
        editor.sync_field_input(EditorField::Label, "old");
        editor.select_next_role(5);

        editor.attach(&Provider::new(ProviderType::Okta));

        assert!(editor.add_role().input().is_empty());
        assert!(editor.field_input().input().is_empty());
        assert_eq!(editor.active_field(), None);
        assert_eq!(editor.selected_role(), 0);
    }

    #[test]
    fn field_values_read_through_the_variant() {
        let provider = Provider::new(ProviderType::Okta)
            .with_saml_url("https://idp.example.com/sso")
            .with_label("Okta");
        assert_eq!(
            ProviderEditorState::field_value(&provider, EditorField::SamlUrl),
            Some("https://idp.example.com/sso")
        );
        assert_eq!(
            ProviderEditorState::field_value(&provider, EditorField::Domain),
            None
        );
        assert_eq!(
            ProviderEditorState::field_value(&provider, EditorField::Label),
            Some("Okta")
        );
    }
}
