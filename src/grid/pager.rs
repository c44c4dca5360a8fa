//! Pager controls of a rendered grid.
//!
//! Navigation only clicks the pager anchor; it does not wait for the grid to
//! re-render. Callers await render stability through the driver afterwards
//! (implicit waits, polling) before reading the new page.

use chromiumoxide::element::Element;

use crate::error::{GridError, Result};

const NEXT_PAGE_SELECTOR: &str = r#"a[title="Go to the next page"]"#;
const PREVIOUS_PAGE_SELECTOR: &str = r#"a[title="Go to the previous page"]"#;
const SELECTED_PAGE_SELECTOR: &str = ".k-pager-numbers .k-state-selected";

pub trait KendoPagerExt {
    /// Click the "next page" pager anchor.
    async fn next_page(&self) -> Result<()>;

    /// Click the "previous page" pager anchor.
    async fn previous_page(&self) -> Result<()>;

    /// Page number shown by the selected pager entry.
    async fn current_page_number(&self) -> Result<u32>;
}

impl KendoPagerExt for Element {
    async fn next_page(&self) -> Result<()> {
        click_pager_anchor(self, NEXT_PAGE_SELECTOR, "next page").await
    }

    async fn previous_page(&self) -> Result<()> {
        click_pager_anchor(self, PREVIOUS_PAGE_SELECTOR, "previous page").await
    }

    async fn current_page_number(&self) -> Result<u32> {
        let indicator = self.find_element(SELECTED_PAGE_SELECTOR).await.map_err(|_| {
            GridError::PageNumberUnreadable("selected page indicator not found".to_string())
        })?;

        let text = indicator.inner_text().await?.unwrap_or_default();
        text.trim()
            .parse()
            .map_err(|_| GridError::PageNumberUnreadable(format!("not a page number: {text:?}")))
    }
}

async fn click_pager_anchor(grid: &Element, selector: &str, name: &str) -> Result<()> {
    let anchor = grid
        .find_element(selector)
        .await
        .map_err(|_| GridError::PagerControlNotFound(name.to_string()))?;
    anchor.click().await?;
    Ok(())
}
