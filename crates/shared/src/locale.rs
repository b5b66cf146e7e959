//! Display locale tags and the static label table.
//!
//! Locale choice affects labels only, never data semantics.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Indonesian (Bahasa Indonesia).
    #[default]
    Id,
    /// English.
    En,
}

impl Locale {
    /// Returns the locale tag string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::En => "en",
        }
    }

    /// Parses a locale tag string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Returns the label set for this locale.
    #[must_use]
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Id => &LABELS_ID,
            Self::En => &LABELS_EN,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown locale: {s}"))
    }
}

/// Every user-visible label in one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Labels {
    /// Dashboard title.
    pub title: &'static str,
    /// Spreadsheet upload prompt.
    pub upload: &'static str,
    /// Filter panel heading.
    pub filter: &'static str,
    /// City filter label.
    pub city: &'static str,
    /// Product line filter label.
    pub product_line: &'static str,
    /// Payment method filter label.
    pub payment: &'static str,
    /// Date range picker label.
    pub date_range: &'static str,
    /// Total revenue KPI label.
    pub total_revenue: &'static str,
    /// Total profit KPI label.
    pub total_profit: &'static str,
    /// Total quantity KPI label.
    pub total_quantity: &'static str,
    /// Revenue-by-product-line chart title.
    pub revenue_by_product_line: &'static str,
    /// Revenue-by-city chart title.
    pub revenue_by_city: &'static str,
    /// Payment distribution chart title.
    pub payment_distribution: &'static str,
    /// Daily revenue trend chart title.
    pub daily_revenue: &'static str,
    /// Quantity-by-product-line chart title.
    pub quantity_by_product_line: &'static str,
    /// Prompt shown while no dataset is loaded.
    pub idle: &'static str,
}

/// Indonesian labels.
pub static LABELS_ID: Labels = Labels {
    title: "Dashboard Bisnis Supermarket",
    upload: "Unggah File Excel",
    filter: "Filter Data",
    city: "Kota",
    product_line: "Kategori Produk",
    payment: "Metode Pembayaran",
    date_range: "Rentang Tanggal",
    total_revenue: "Total Pendapatan",
    total_profit: "Total Keuntungan",
    total_quantity: "Total Produk Terjual",
    revenue_by_product_line: "Pendapatan per Kategori Produk",
    revenue_by_city: "Pendapatan per Kota",
    payment_distribution: "Distribusi Metode Pembayaran",
    daily_revenue: "Tren Pendapatan Harian",
    quantity_by_product_line: "Jumlah Produk Terjual per Kategori",
    idle: "Unggah file Excel untuk memulai.",
};

/// English labels.
pub static LABELS_EN: Labels = Labels {
    title: "Supermarket Business Dashboard",
    upload: "Upload Excel File",
    filter: "Data Filter",
    city: "City",
    product_line: "Product Line",
    payment: "Payment Method",
    date_range: "Date Range",
    total_revenue: "Total Revenue",
    total_profit: "Total Profit",
    total_quantity: "Total Quantity Sold",
    revenue_by_product_line: "Revenue by Product Line",
    revenue_by_city: "Revenue by City",
    payment_distribution: "Payment Method Distribution",
    daily_revenue: "Daily Revenue Trend",
    quantity_by_product_line: "Quantity Sold by Product Line",
    idle: "Upload an Excel file to get started.",
};

/// Immutable label table keyed by locale tag.
pub static LOCALE_TABLE: Lazy<HashMap<&'static str, &'static Labels>> = Lazy::new(|| {
    HashMap::from([
        (Locale::Id.as_str(), &LABELS_ID),
        (Locale::En.as_str(), &LABELS_EN),
    ])
});

/// Looks up the label set for a locale tag.
#[must_use]
pub fn labels_for_tag(tag: &str) -> Option<&'static Labels> {
    LOCALE_TABLE.get(tag).copied()
}
