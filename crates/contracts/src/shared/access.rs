//! Role-based access: the authorization policy and the navigation-menu
//! filter built on top of it.
//!
//! Both the sidebar and the page guard answer the same question — "can role
//! R see resource X" — so the policy lives here once and both consume it.

use serde::{Deserialize, Serialize};

// ============================================================================
// Roles
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Guest => "guest",
        }
    }

    /// Unknown strings resolve to `Guest`, the most restrictive role.
    pub fn parse(s: &str) -> Role {
        match s {
            "admin" => Role::Admin,
            "user" => Role::User,
            _ => Role::Guest,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Guest
    }
}

/// Central authorization decision. `allowed = None` means the resource is
/// unrestricted.
pub fn can_access(allowed: Option<&[Role]>, role: Role) -> bool {
    match allowed {
        None => true,
        Some(roles) => roles.contains(&role),
    }
}

// ============================================================================
// Menu tree
// ============================================================================
/// A node of the static navigation tree. A node carries either a navigable
/// `path` or `children` (or both); nodes that end up with neither are
/// pruned by [`filter_menu`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub path: Option<String>,
    pub icon: Option<String>,
    /// `None` = visible to every role that can see the parent
    pub roles: Option<Vec<Role>>,
    pub children: Option<Vec<MenuItem>>,
}

impl MenuItem {
    pub fn leaf(title: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            path: Some(path.to_string()),
            icon: None,
            roles: None,
            children: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.roles = Some(roles.to_vec());
        self
    }

    pub fn group(title: &str, children: Vec<MenuItem>) -> Self {
        Self {
            title: title.to_string(),
            path: None,
            icon: None,
            roles: None,
            children: Some(children),
        }
    }
}

/// Top-level menu grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub subheader: String,
    pub roles: Option<Vec<Role>>,
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    pub fn new(subheader: &str, items: Vec<MenuItem>) -> Self {
        Self {
            subheader: subheader.to_string(),
            roles: None,
            items,
        }
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.roles = Some(roles.to_vec());
        self
    }
}

// ============================================================================
// Filter
// ============================================================================
/// Prune a menu definition down to what `role` may see.
///
/// Rules, applied top-down:
/// - a node whose `roles` excludes `role` disappears with its subtree;
/// - a leaf survives only if it has a `path`;
/// - a parent whose children all disappear survives only if it has its own
///   `path`, and is then kept as a leaf (`children: None`);
/// - a section with no surviving items disappears.
///
/// Order is preserved; the input is never mutated; no role ever makes this
/// fail — an unknown role just gets the unrestricted sections.
pub fn filter_menu(sections: &[MenuSection], role: Role) -> Vec<MenuSection> {
    sections
        .iter()
        .filter(|section| can_access(section.roles.as_deref(), role))
        .filter_map(|section| {
            let items: Vec<MenuItem> = section
                .items
                .iter()
                .filter_map(|item| filter_item(item, role))
                .collect();
            if items.is_empty() {
                return None;
            }
            Some(MenuSection {
                subheader: section.subheader.clone(),
                roles: section.roles.clone(),
                items,
            })
        })
        .collect()
}

fn filter_item(item: &MenuItem, role: Role) -> Option<MenuItem> {
    if !can_access(item.roles.as_deref(), role) {
        return None;
    }

    match &item.children {
        None => {
            // Leaf: only navigable entries survive
            item.path.as_ref()?;
            Some(item.clone())
        }
        Some(children) => {
            let visible: Vec<MenuItem> = children
                .iter()
                .filter_map(|child| filter_item(child, role))
                .collect();
            if visible.is_empty() && item.path.is_none() {
                // A dead parent entry; dropped silently
                return None;
            }
            Some(MenuItem {
                title: item.title.clone(),
                path: item.path.clone(),
                icon: item.icon.clone(),
                roles: item.roles.clone(),
                // An empty list degrades to a leaf so renderers don't draw
                // an expand chevron on nothing
                children: if visible.is_empty() { None } else { Some(visible) },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Vec<MenuSection> {
        vec![
            MenuSection::new(
                "Ventas",
                vec![
                    MenuItem::leaf("Lista de Ventas", "/dashboard/sales/list")
                        .with_roles(&[Role::Admin, Role::User]),
                    MenuItem::leaf("Crear Venta", "/dashboard/sales/new")
                        .with_roles(&[Role::Admin, Role::User]),
                ],
            )
            .with_roles(&[Role::Admin, Role::User]),
            MenuSection::new(
                "Administración",
                vec![MenuItem::group(
                    "Usuarios",
                    vec![
                        MenuItem::leaf("Lista Usuarios", "/dashboard/user/list")
                            .with_roles(&[Role::Admin]),
                        MenuItem::leaf("Crear Usuario", "/dashboard/user/new")
                            .with_roles(&[Role::Admin]),
                    ],
                )],
            )
            .with_roles(&[Role::Admin]),
            MenuSection::new(
                "Aplicaciones",
                vec![MenuItem::leaf("Calendario", "/dashboard/calendar")],
            ),
        ]
    }

    #[test]
    fn test_admin_sees_everything() {
        let filtered = filter_menu(&sample_menu(), Role::Admin);
        assert_eq!(filtered.len(), 3);
        let subheaders: Vec<&str> = filtered.iter().map(|s| s.subheader.as_str()).collect();
        assert_eq!(subheaders, vec!["Ventas", "Administración", "Aplicaciones"]);
    }

    #[test]
    fn test_admin_only_section_hidden_from_user() {
        let filtered = filter_menu(&sample_menu(), Role::User);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.subheader != "Administración"));
    }

    #[test]
    fn test_unknown_role_gets_most_restrictive_menu() {
        let filtered = filter_menu(&sample_menu(), Role::parse("intruder"));
        // Only the unrestricted section survives
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].subheader, "Aplicaciones");
    }

    #[test]
    fn test_no_surviving_node_excludes_role() {
        let filtered = filter_menu(&sample_menu(), Role::User);
        fn walk(items: &[MenuItem], role: Role) {
            for item in items {
                assert!(can_access(item.roles.as_deref(), role));
                if let Some(children) = &item.children {
                    assert!(!children.is_empty());
                    walk(children, role);
                }
            }
        }
        for section in &filtered {
            assert!(!section.items.is_empty());
            walk(&section.items, Role::User);
        }
    }

    #[test]
    fn test_parent_without_path_dropped_when_children_vanish() {
        let menu = vec![MenuSection::new(
            "Gestión",
            vec![
                MenuItem::group(
                    "Usuarios",
                    vec![MenuItem::leaf("Lista", "/users").with_roles(&[Role::Admin])],
                ),
                MenuItem::leaf("Clientes", "/clients"),
            ],
        )];
        let filtered = filter_menu(&menu, Role::User);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].items.len(), 1);
        assert_eq!(filtered[0].items[0].title, "Clientes");
    }

    #[test]
    fn test_parent_with_own_path_degrades_to_leaf() {
        let parent = MenuItem {
            title: "Reportes".into(),
            path: Some("/reports".into()),
            icon: None,
            roles: None,
            children: Some(vec![
                MenuItem::leaf("Mensual", "/reports/monthly").with_roles(&[Role::Admin])
            ]),
        };
        let menu = vec![MenuSection::new("Aplicaciones", vec![parent])];
        let filtered = filter_menu(&menu, Role::User);
        assert_eq!(filtered[0].items.len(), 1);
        assert!(filtered[0].items[0].children.is_none());
        assert_eq!(filtered[0].items[0].path.as_deref(), Some("/reports"));
    }

    #[test]
    fn test_leaf_without_path_dropped() {
        let menu = vec![MenuSection::new(
            "Aplicaciones",
            vec![
                MenuItem {
                    title: "Próximamente".into(),
                    path: None,
                    icon: None,
                    roles: None,
                    children: None,
                },
                MenuItem::leaf("Calendario", "/calendar"),
            ],
        )];
        let filtered = filter_menu(&menu, Role::Admin);
        assert_eq!(filtered[0].items.len(), 1);
        assert_eq!(filtered[0].items[0].title, "Calendario");
    }

    #[test]
    fn test_order_preserved() {
        let filtered = filter_menu(&sample_menu(), Role::Admin);
        let titles: Vec<&str> = filtered[0].items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Lista de Ventas", "Crear Venta"]);
    }

    #[test]
    fn test_filter_is_pure() {
        let menu = sample_menu();
        let _ = filter_menu(&menu, Role::Guest);
        assert_eq!(menu, sample_menu());
    }

    #[test]
    fn test_can_access_policy() {
        assert!(can_access(None, Role::Guest));
        assert!(can_access(Some(&[Role::Admin, Role::User]), Role::User));
        assert!(!can_access(Some(&[Role::Admin]), Role::User));
        assert!(!can_access(Some(&[]), Role::Admin));
    }
}
