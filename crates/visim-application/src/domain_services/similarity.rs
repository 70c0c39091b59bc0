//! Similarity scan engine
//!
//! The core of the service: a linear scan over every stored embedding in
//! the catalog, scoring each against the query vector and keeping the best
//! matches above a threshold.
//!
//! The scan is deliberately a full O(products x images) pass with no index;
//! at current catalog sizes correctness and simplicity win. The public
//! contract is the seam where an approximate nearest-neighbor structure can
//! be introduced later without touching any caller.

use std::pin::pin;

use futures::{Stream, StreamExt};
use tracing::{debug, warn};

use visim_domain::error::{Error, Result};
use visim_domain::value_objects::{cosine_similarity, Product, SimilarityMatch};

use super::RankedResultSet;

/// Full-scan similarity engine
///
/// Stateless; all inputs arrive per query. The catalog is consumed through
/// a caller-supplied cursor, so every request scans independently and a
/// dropped request future simply abandons its own cursor mid-scan.
pub struct SimilarityEngine;

impl SimilarityEngine {
    /// Scan the catalog and return the ranked matches for a query vector
    ///
    /// # Arguments
    /// * `query` - The query embedding to score against
    /// * `products` - A fresh catalog cursor; item errors are skipped
    /// * `threshold` - Matches must score strictly greater than this
    /// * `top_k` - Maximum number of matches returned
    ///
    /// # Returns
    /// Matches in descending score order, catalog encounter order on exact
    /// ties, at most `top_k` entries. An empty catalog yields an empty list.
    ///
    /// ## Fault isolation
    ///
    /// A single unreadable catalog record or unscorable stored embedding
    /// (wrong dimension, zero norm) never aborts the query: the entry is
    /// logged and skipped, and the scan continues. Images that were never
    /// indexed (no stored embedding) are silently passed over.
    pub async fn find_similar<S>(
        query: &[f32],
        products: S,
        threshold: f32,
        top_k: usize,
    ) -> Vec<SimilarityMatch>
    where
        S: Stream<Item = Result<Product>>,
    {
        let mut ranked = RankedResultSet::with_capacity(top_k);
        let mut scanned = 0usize;
        let mut skipped = 0usize;

        let mut products = pin!(products);
        while let Some(record) = products.next().await {
            let product = match record {
                Ok(product) => product,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable catalog record");
                    skipped += 1;
                    continue;
                }
            };

            for image in &product.images {
                // Absent embedding means "not yet indexed", not an error
                let Some(stored) = image.embedding.as_deref() else {
                    continue;
                };
                scanned += 1;

                match cosine_similarity(query, stored) {
                    Ok(score) if score > threshold => {
                        ranked.push(SimilarityMatch {
                            image_url: image.url.clone(),
                            score,
                            product_id: product.id.clone(),
                        });
                    }
                    Ok(_) => {}
                    Err(err) => {
                        let fault =
                            Error::malformed_embedding(&product.id, &image.url, err.to_string());
                        warn!(error = %fault, "skipping catalog entry during similarity scan");
                        skipped += 1;
                    }
                }
            }
        }

        let matches = ranked.into_ranked();
        debug!(
            scanned,
            skipped,
            matches = matches.len(),
            threshold,
            top_k,
            "similarity scan complete"
        );
        matches
    }
}
