//! Terminal front end
//!
//! Render targets and a chart backend that draw the dashboard on stdout.
//! Panels behave like their browser counterparts: every panel keeps its
//! latest content, only the visible one is printed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::badge::Badge;
use crate::charts::{ChartBackend, ChartSlot};
use crate::dashboard::Targets;
use crate::render::{
    ChartConfig, ChartKind, ClientRow, Notifier, OrderDetailView, OrderRow, ProductRow,
    RenderTarget, StatsCards,
};
use crate::view::{View, ViewSurface};

const BAR_WIDTH: usize = 40;

/// Wrap `text` in the badge's ANSI colour
pub fn paint(badge: Badge, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", badge.ansi_color(), text)
}

pub fn format_stats(cards: &StatsCards) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {}", "Clientes", cards.total_clients);
    let _ = writeln!(out, "{:<18} {}", "Produtos", cards.total_products);
    let _ = writeln!(out, "{:<18} {}", "Pedidos", cards.total_orders);
    let _ = writeln!(out, "{:<18} {}", "Receita total", cards.total_revenue);
    if let Some(suppliers) = &cards.total_suppliers {
        let _ = writeln!(out, "{:<18} {}", "Fornecedores", suppliers);
    }

    if !cards.by_status.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Pedidos por status:");
        for tally in &cards.by_status {
            let status = format!("{:<14}", tally.status);
            let _ = writeln!(out, "  {} {}", paint(tally.badge, &status), tally.count);
        }
    }

    out
}

pub fn format_products(rows: &[ProductRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<28} {:<16} {:>14} {:>8}  {}",
        "Produto", "Categoria", "Preço", "Estoque", "Fornecedor"
    );
    let _ = writeln!(out, "{}", "-".repeat(86));

    for row in rows {
        // Pad before painting so escape codes don't skew the columns
        let stock = paint(row.stock_badge, &format!("{:>8}", row.stock));
        let _ = writeln!(
            out,
            "{:<28} {:<16} {:>14} {}  {}",
            row.name, row.category, row.price, stock, row.supplier
        );
    }

    if rows.is_empty() {
        let _ = writeln!(out, "Nenhum produto cadastrado.");
    }
    out
}

pub fn format_clients(rows: &[ClientRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<28} {:<16} {:<4} {}",
        "Nome", "Email", "Telefone", "Tipo", "Cidade"
    );
    let _ = writeln!(out, "{}", "-".repeat(86));

    for row in rows {
        let kind = paint(row.kind_badge, &format!("{:<4}", row.kind));
        let _ = writeln!(
            out,
            "{:<24} {:<28} {:<16} {} {}",
            row.name, row.email, row.phone, kind, row.city
        );
    }

    if rows.is_empty() {
        let _ = writeln!(out, "Nenhum cliente cadastrado.");
    }
    out
}

pub fn format_orders(rows: &[OrderRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<24} {:<12} {:>14}  {}",
        "Pedido", "Cliente", "Data", "Total", "Status"
    );
    let _ = writeln!(out, "{}", "-".repeat(72));

    for row in rows {
        let _ = writeln!(
            out,
            "{:<8} {:<24} {:<12} {:>14}  {}",
            row.label,
            row.customer,
            row.date,
            row.total,
            paint(row.status_badge, &row.status)
        );
    }

    if rows.is_empty() {
        let _ = writeln!(out, "Nenhum pedido encontrado.");
    }
    out
}

pub fn format_order_detail(view: &OrderDetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));
    let _ = writeln!(out, "{:<36} {}", "Informações do Cliente", "Informações do Pedido");
    let _ = writeln!(out, "{:<36} Data: {}", format!("Nome: {}", view.customer), view.date);
    let _ = writeln!(
        out,
        "{:<36} Status: {}",
        format!("Email: {}", view.email),
        paint(view.status_badge, &view.status)
    );
    let _ = writeln!(out, "{:<36} Total: {}", format!("Telefone: {}", view.phone), view.total);
    let _ = writeln!(out);
    let _ = writeln!(out, "Itens do Pedido");
    let _ = writeln!(
        out,
        "{:<28} {:>10} {:>14} {:>14}",
        "Produto", "Quantidade", "Preço Unit.", "Subtotal"
    );
    let _ = writeln!(out, "{}", "-".repeat(69));
    for item in &view.items {
        let _ = writeln!(
            out,
            "{:<28} {:>10} {:>14} {:>14}",
            item.product, item.quantity, item.unit_price, item.subtotal
        );
    }
    out
}

pub fn format_chart(slot: ChartSlot, config: &ChartConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", slot.title());

    if config.is_empty() {
        let _ = writeln!(out, "  (sem dados)");
        return out;
    }

    let label_width = config
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    match config.kind {
        ChartKind::Doughnut => {
            let total = config.total();
            for (label, value) in config.labels.iter().zip(&config.values) {
                let share = if total > 0.0 { value / total } else { 0.0 };
                let bar = "█".repeat((share * BAR_WIDTH as f64).round() as usize);
                let _ = writeln!(
                    out,
                    "  {:<width$} {:<bar_width$} {:>5.1}%",
                    label,
                    bar,
                    share * 100.0,
                    width = label_width,
                    bar_width = BAR_WIDTH
                );
            }
        }
        ChartKind::Line => {
            let max = config.values.iter().cloned().fold(0.0_f64, f64::max);
            for (label, value) in config.labels.iter().zip(&config.values) {
                let len = if max > 0.0 {
                    (value / max * BAR_WIDTH as f64).round() as usize
                } else {
                    0
                };
                let _ = writeln!(
                    out,
                    "  {:<width$} {:<bar_width$} {}",
                    label,
                    "▇".repeat(len),
                    config.format_tick(*value),
                    width = label_width,
                    bar_width = BAR_WIDTH
                );
            }
        }
    }

    out
}

/// Latest content of every panel
#[derive(Debug, Default)]
pub struct Screen {
    visible: Option<View>,
    selected: Option<View>,
    panels: HashMap<View, String>,
}

impl Screen {
    pub fn visible(&self) -> Option<View> {
        self.visible
    }

    pub fn panel(&self, view: View) -> Option<&str> {
        self.panels.get(&view).map(String::as_str)
    }

    fn update(&mut self, view: View, content: String) {
        let changed = self.panels.get(&view) != Some(&content);
        self.panels.insert(view, content);
        if changed && self.visible == Some(view) {
            self.print(view);
        }
    }

    fn print(&self, view: View) {
        let nav: Vec<String> = View::ALL
            .iter()
            .map(|v| {
                if self.selected == Some(*v) {
                    format!("[{}]", v.label())
                } else {
                    v.label().to_string()
                }
            })
            .collect();

        println!();
        println!("{}", nav.join("  "));
        println!();
        match self.panels.get(&view) {
            Some(content) => print!("{}", content),
            None => println!("Carregando..."),
        }
    }
}

pub type SharedScreen = Rc<RefCell<Screen>>;

struct ScreenViews(SharedScreen);

impl ViewSurface for ScreenViews {
    fn set_nav_selected(&mut self, view: View, selected: bool) {
        let mut screen = self.0.borrow_mut();
        if selected {
            screen.selected = Some(view);
        } else if screen.selected == Some(view) {
            screen.selected = None;
        }
    }

    fn set_panel_visible(&mut self, view: View, visible: bool) {
        let mut screen = self.0.borrow_mut();
        if visible {
            screen.visible = Some(view);
            screen.print(view);
        } else if screen.visible == Some(view) {
            screen.visible = None;
        }
    }
}

struct PanelTarget<F> {
    screen: SharedScreen,
    view: View,
    format: F,
}

impl<M: ?Sized, F: Fn(&M) -> String> RenderTarget<M> for PanelTarget<F> {
    fn render(&mut self, model: &M) {
        let content = (self.format)(model);
        self.screen.borrow_mut().update(self.view, content);
    }
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&mut self, message: &str) {
        eprintln!("{}", paint(Badge::Danger, &format!("✕ {}", message)));
    }
}

impl Targets {
    /// Targets drawing on stdout, with errors on stderr
    pub fn terminal() -> Self {
        Self::terminal_with_screen().0
    }

    /// Same as [`Targets::terminal`], also handing back the screen
    pub fn terminal_with_screen() -> (Self, SharedScreen) {
        let screen = SharedScreen::default();

        let targets = Targets {
            views: Box::new(ScreenViews(screen.clone())),
            stats: Box::new(PanelTarget {
                screen: screen.clone(),
                view: View::Overview,
                format: format_stats,
            }),
            products: Box::new(PanelTarget {
                screen: screen.clone(),
                view: View::Products,
                format: format_products,
            }),
            clients: Box::new(PanelTarget {
                screen: screen.clone(),
                view: View::Clients,
                format: format_clients,
            }),
            orders: Box::new(PanelTarget {
                screen: screen.clone(),
                view: View::Orders,
                format: format_orders,
            }),
            order_detail: Box::new(|view: &OrderDetailView| {
                println!();
                print!("{}", format_order_detail(view));
            }),
            notifier: Box::new(StderrNotifier),
        };

        (targets, screen)
    }
}

/// Chart backend printing text charts
#[derive(Debug, Default)]
pub struct TerminalCharts {
    next_id: u64,
    live: usize,
}

impl TerminalCharts {
    pub fn live(&self) -> usize {
        self.live
    }
}

impl ChartBackend for TerminalCharts {
    type Handle = u64;

    fn create(&mut self, slot: ChartSlot, config: &ChartConfig) -> Option<u64> {
        println!();
        print!("{}", format_chart(slot, config));
        self.next_id += 1;
        self.live += 1;
        Some(self.next_id)
    }

    fn dispose(&mut self, handle: u64) {
        tracing::trace!("Disposing terminal chart {}", handle);
        self.live = self.live.saturating_sub(1);
    }
}
