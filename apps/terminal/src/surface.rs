use std::io::Write;

use client_core::{view::BUY_LABEL, FilterOptions, ProductCard, RenderMode, UiSurface};

/// Plain-text rendering of the catalog onto any writer (stdout in the binary).
pub struct TerminalSurface<W: Write> {
    out: W,
    shown: usize,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, shown: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        if let Err(error) = writeln!(self.out, "{}", text.as_ref()) {
            tracing::warn!(%error, "failed to write to terminal");
        }
    }

    pub fn flush(&mut self) {
        if let Err(error) = self.out.flush() {
            tracing::warn!(%error, "failed to flush terminal");
        }
    }
}

impl<W: Write> UiSurface for TerminalSurface<W> {
    fn render_products(&mut self, cards: &[ProductCard], mode: RenderMode) {
        if mode == RenderMode::Replace {
            self.shown = 0;
            self.line("== produtos ==");
            if cards.is_empty() {
                self.line("  nenhum produto encontrado");
            }
        }
        for card in cards {
            self.shown += 1;
            let number = self.shown;
            self.line(format!("[{number:>2}] {}", card.name));
            self.line(format!("     {} | {}", card.price, card.installments));
            self.line(format!("     {}  [{BUY_LABEL}]", card.image));
        }
        self.flush();
    }

    fn render_filter_options(&mut self, options: &FilterOptions) {
        self.line("== filtros ==");
        self.line(format!("cores:   {}", options.colors.join(", ")));
        self.line(format!("tamanhos: {}", options.sizes.join(", ")));
        self.line("preços:");
        for (index, bracket) in options.price_brackets.iter().enumerate() {
            self.line(format!("  {}) {}", index + 1, bracket.label));
        }
        self.flush();
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        if visible {
            self.line("-- 'more' para carregar mais --");
            self.flush();
        }
    }

    fn render_cart_count(&mut self, count: u64) {
        self.line(format!("carrinho: {count}"));
        self.flush();
    }
}
