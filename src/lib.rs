//! docsym: inspect JSDoc-style symbol metadata and turn doc-comment text
//! into HTML fragments for documentation site generators.
//!
//! Everything here is a pure function of its arguments: symbols are only
//! borrowed, nothing is cached, and all entry points are safe to call from
//! any number of threads.
//!
//! ```
//! use docsym::{markup, symbol, ParseOptions};
//!
//! let html = markup::parse("Use `run()`, see {@link Runner}.", &ParseOptions::default());
//! assert_eq!(html, "<p>Use <code>run()</code>, see <a href=\"Runner\">Runner</a>.</p>");
//!
//! let symbols = docsym::load_symbols(r#"[{"name": "run", "longname": "Runner#run"}]"#).unwrap();
//! assert_eq!(symbol::get_long_name(&symbols[0]), "Runner#run");
//! ```

pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod notate;
pub mod symbol;

pub use error::{Error, Result};
pub use markup::{parse, ParseOptions};
pub use model::{load_symbols, Symbol};
pub use notate::notate;
