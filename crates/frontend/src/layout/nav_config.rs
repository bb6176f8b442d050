//! Static navigation tree. The sidebar prunes it with
//! `contracts::shared::access::filter_menu` on every render, so entries
//! only declare who may see them — the filtering itself lives in one place.
//!
//! Item paths are tab keys consumed by the tab registry.

use contracts::shared::access::{MenuItem, MenuSection, Role};

const ADMIN_AND_USER: [Role; 2] = [Role::Admin, Role::User];
const ADMIN_ONLY: [Role; 1] = [Role::Admin];

pub fn nav_sections() -> Vec<MenuSection> {
    vec![
        // VENTAS
        MenuSection::new(
            "Ventas",
            vec![
                MenuItem::leaf("Lista de Ventas", "sales_list")
                    .with_icon("banking")
                    .with_roles(&ADMIN_AND_USER),
                MenuItem::leaf("Crear Venta", "sales_new")
                    .with_icon("commerce")
                    .with_roles(&ADMIN_AND_USER),
            ],
        )
        .with_roles(&ADMIN_AND_USER),
        // GESTIÓN
        MenuSection::new(
            "Gestión",
            vec![
                MenuItem::leaf("Clientes", "clients_list")
                    .with_icon("customers")
                    .with_roles(&ADMIN_AND_USER),
                MenuItem::leaf("Pedidos", "orders_list")
                    .with_icon("orders")
                    .with_roles(&ADMIN_AND_USER),
                MenuItem::leaf("Productos", "products_list")
                    .with_icon("products")
                    .with_roles(&ADMIN_AND_USER),
            ],
        )
        .with_roles(&ADMIN_AND_USER),
        // ADMINISTRACIÓN
        MenuSection::new(
            "Administración",
            vec![MenuItem::group(
                "Usuarios",
                vec![
                    MenuItem::leaf("Lista Usuarios", "users_list").with_roles(&ADMIN_ONLY),
                    MenuItem::leaf("Crear Usuario", "users_new").with_roles(&ADMIN_ONLY),
                    MenuItem::leaf("Mi cuenta", "account").with_roles(&ADMIN_ONLY),
                ],
            )
            .with_icon("users")],
        )
        .with_roles(&ADMIN_ONLY),
        // APLICACIONES
        MenuSection::new(
            "Aplicaciones",
            vec![MenuItem::leaf("Calendario", "calendar").with_icon("calendar")],
        ),
    ]
}
