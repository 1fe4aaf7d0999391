//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use storefront_commerce::cart::OrderSummary;
use storefront_commerce::catalog::Product;
use storefront_commerce::store::{Notification, NotificationKind};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a store notification the way its kind calls for.
    pub fn notification(&self, note: &Notification) {
        match note.kind {
            NotificationKind::Success => self.success(&note.message),
            NotificationKind::Error => self.error(&note.message),
        }
    }

    /// Print an order summary block.
    pub fn summary(&self, summary: &OrderSummary) {
        self.kv(
            &format!("Subtotal ({} items)", summary.item_count),
            &summary.subtotal.display(),
        );
        if summary.has_discount() {
            let label = summary.coupon_code.as_deref().unwrap_or("Discount");
            self.kv(label, &format!("-{}", summary.discount.display()));
        }
        let shipping = if summary.has_free_shipping() {
            "Free".to_string()
        } else {
            summary.shipping.display()
        };
        self.kv("Shipping", &shipping);
        if !summary.tax.is_zero() {
            self.kv("Tax (GST)", &summary.tax.display());
        }
        self.kv("Total", &style(summary.total.display()).bold().to_string());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price with the struck-through original and discount, when on sale.
pub fn price_label(product: &Product) -> String {
    match (product.original_price, product.discount_percent()) {
        (Some(original), Some(percent)) => format!(
            "{} {} {}",
            style(product.price.display()).bold(),
            style(original.display()).dim().strikethrough(),
            style(format!("{}% OFF", percent)).green()
        ),
        _ => style(product.price.display()).bold().to_string(),
    }
}

/// Star rating with review count (e.g. "4.5★ (128)").
pub fn rating_label(product: &Product) -> String {
    format!("{:.1}★ ({})", product.rating, product.reviews)
}

/// Stock badge.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("in stock").green().to_string()
    } else {
        style("out of stock").red().to_string()
    }
}
