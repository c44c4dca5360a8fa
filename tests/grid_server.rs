//! Local HTTP server serving Kendo-grid-shaped fixture pages.
//!
//! The pages render the same markup the widget produces: a `kendo-grid` marker
//! attribute on the container, rows under `.k-grid-content table`, binding
//! attributes on cell sub-elements, a pager with fixed-title anchors, and a
//! click handler that swaps a data cell for a named input, mimicking the
//! widget's inline-edit mode.
//!
//! Each server instance runs on a random available port for test isolation.

use std::net::SocketAddr;
use tokio::sync::oneshot;
use warp::Filter;

const GRID_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><title>Employees</title></head>
<body>
<div id="grid" kendo-grid="employeeGrid">
  <div class="k-grid-content">
    <table>
      <tbody>
        <tr>
          <td><span ng-bind="dataItem.name">Alice</span><span data-bind="shadow">ignored</span></td>
          <td><span data-bind="department">Engineering</span></td>
          <td><span ng-bind="dataItem.hiredOn">01-15-2024 03:30 PM</span></td>
          <td><button type="button">Delete</button></td>
        </tr>
        <tr>
          <td><span ng-bind="dataItem.name">Bob</span></td>
          <td><span data-bind="department">Sales</span></td>
          <td><span ng-bind="dataItem.hiredOn">N/A</span></td>
          <td><button type="button">Delete</button></td>
        </tr>
      </tbody>
    </table>
  </div>
  <div class="k-pager-wrap">
    <a href="#" title="Go to the previous page">Previous</a>
    <div class="k-pager-numbers"><span class="k-state-selected">1</span></div>
    <a href="#" title="Go to the next page">Next</a>
  </div>
</div>
<div id="plain">Not a grid at all</div>
<script>
  // Inline edit: clicking a bound cell swaps it for an input named after the
  // bound field, the way the widget's in-cell edit mode does.
  document.querySelectorAll('[ng-bind], [data-bind]').forEach(function (el) {
    el.addEventListener('click', function () {
      var binding = el.getAttribute('ng-bind') || el.getAttribute('data-bind');
      var name = binding.replace(/^dataItem\./, '');
      name = name.charAt(0).toUpperCase() + name.slice(1);
      var input = document.createElement('input');
      input.setAttribute('name', name);
      input.value = el.textContent;
      el.replaceWith(input);
      input.focus();
    });
  });

  // Pager: clicking next/previous just moves the selected page number.
  var selected = document.querySelector('.k-state-selected');
  document.querySelector('a[title="Go to the next page"]')
    .addEventListener('click', function (e) {
      e.preventDefault();
      selected.textContent = String(parseInt(selected.textContent, 10) + 1);
    });
  document.querySelector('a[title="Go to the previous page"]')
    .addEventListener('click', function (e) {
      e.preventDefault();
      selected.textContent = String(parseInt(selected.textContent, 10) - 1);
    });
</script>
</body>
</html>"##;

const EMPTY_GRID_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><title>Empty</title></head>
<body>
<div id="grid" kendo-grid="emptyGrid">
  <div class="k-grid-content">
    <table><tbody></tbody></table>
  </div>
</div>
</body>
</html>"##;

/// Test server that serves the grid fixture pages
pub struct GridServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl GridServer {
    /// Start a new test server on a random available port
    pub async fn start() -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let index = warp::path::end().map(|| warp::reply::html(GRID_PAGE));
        let empty = warp::path("empty").map(|| warp::reply::html(EMPTY_GRID_PAGE));
        let routes = index.or(empty);

        let (addr, server) =
            warp::serve(routes).bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
                shutdown_rx.await.ok();
            });

        tokio::spawn(server);

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Base URL for this server (e.g. "http://127.0.0.1:12345")
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Wait for the server to be ready by making a test request
    pub async fn wait_ready(&self) -> anyhow::Result<()> {
        let url = self.url();
        let max_attempts = 10;

        for attempt in 1..=max_attempts {
            match reqwest::get(&url).await {
                Ok(response) if response.status().is_success() => return Ok(()),
                Ok(response) => {
                    println!("attempt {}: server returned {}", attempt, response.status());
                }
                Err(e) => {
                    println!("attempt {}: server not ready - {}", attempt, e);
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
            }
        }

        anyhow::bail!("server did not become ready after {} attempts", max_attempts)
    }
}

impl Drop for GridServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
