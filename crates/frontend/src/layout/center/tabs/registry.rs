//! Tab registry: maps a tab key to its display label.
//! Page content for each key is resolved in `tabs.rs`.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "sales_list" => "Lista de Ventas",
        "sales_new" => "Crear Venta",
        "clients_list" => "Clientes",
        "clients_new" => "Nuevo Cliente",
        "orders_list" => "Pedidos",
        "orders_new" => "Nuevo Pedido",
        "products_list" => "Productos",
        "products_new" => "Nuevo Producto",
        "users_list" => "Lista Usuarios",
        "users_new" => "Crear Usuario",
        "account" => "Mi cuenta",
        "calendar" => "Calendario",
        _ => "Página",
    }
}
