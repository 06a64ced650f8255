//! Resource lookup-or-create
//!
//! The list endpoints filter names loosely (substring/prefix), so every lookup
//! narrows results locally and refuses to pick between several matches.

use log::{debug, info};

use crate::client::ResourceApi;
use crate::client::models::{
    CreateSpec, Identifier, ResourceKind, ResourceMatch, ResourceQuery, ResourceRecord,
};
use crate::client::pagination::PaginationParams;
use crate::error::{ApiError, Error, ResolveError, Result};

/// Resolves names to resources, creating them on request.
pub struct Resolver<'a, C: ResourceApi + ?Sized> {
    client: &'a C,
    page_size: usize,
}

impl<'a, C: ResourceApi + ?Sized> Resolver<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            page_size: crate::client::pagination::DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the page size used while collecting candidates.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Find the single resource matching `query`, or create it from `create`.
    ///
    /// - no match, no create spec: `ResolveError::NotFound`
    /// - no match, create spec: one create call, returns the new resource
    /// - one match: returned as is
    /// - several matches: `ResolveError::Ambiguous`, nothing is created
    pub async fn resolve(
        &self,
        query: &ResourceQuery,
        create: Option<&CreateSpec>,
    ) -> Result<ResourceMatch> {
        let name = match query.identifier() {
            Identifier::Id(id) => return self.resolve_id(query.kind, id).await,
            Identifier::Name(name) => name,
        };

        let candidates = self.candidates(query.kind, name).await?;
        let mut matches: Vec<ResourceMatch> = candidates
            .iter()
            .filter(|r| query.match_mode.matches(r.display_name(), name))
            .map(ResourceMatch::from)
            .collect();

        debug!(
            "{} '{}': {} raw candidates, {} after {:?} narrowing",
            query.kind,
            name,
            candidates.len(),
            matches.len(),
            query.match_mode
        );

        match matches.len() {
            0 => match create {
                Some(spec) => self.create(spec).await,
                None => Err(ResolveError::NotFound {
                    kind: query.kind,
                    name: name.to_string(),
                }
                .into()),
            },
            1 => Ok(matches.remove(0)),
            _ => Err(ResolveError::Ambiguous {
                kind: query.kind,
                name: name.to_string(),
                candidates: matches,
            }
            .into()),
        }
    }

    /// Collect every record the server's name filter returns, across pages.
    pub async fn candidates(&self, kind: ResourceKind, name: &str) -> Result<Vec<ResourceRecord>> {
        let mut params = PaginationParams::new().limit(self.page_size);
        let mut all = Vec::new();

        loop {
            let page = self
                .client
                .list_resources(kind, Some(name), Some(&params))
                .await?;
            let received = page.items.len();
            let more = page.has_more(all.len() + received, params.page_size());
            all.extend(page.items);

            if !more {
                break;
            }
            params = params.next_page(received);
        }

        Ok(all)
    }

    async fn resolve_id(&self, kind: ResourceKind, id: &str) -> Result<ResourceMatch> {
        match self.client.get_resource(kind, id).await {
            Ok(record) => Ok(ResourceMatch::from(&record)),
            Err(Error::Api(ApiError::NotFound(_))) => Err(ResolveError::NotFound {
                kind,
                name: format!("id:{}", id),
            }
            .into()),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, spec: &CreateSpec) -> Result<ResourceMatch> {
        info!("Creating {} '{}'", spec.kind, spec.name);

        let record = match self.client.create_resource(spec).await {
            Ok(record) => record,
            Err(Error::Api(source)) if source.status().is_some() => {
                return Err(ResolveError::CreateFailed {
                    kind: spec.kind,
                    name: spec.name.clone(),
                    source,
                }
                .into());
            }
            Err(e) => return Err(e),
        };

        // Some create endpoints echo only the id
        let name = match record.display_name() {
            "" => spec.name.clone(),
            n => n.to_string(),
        };
        Ok(ResourceMatch::new(record.id, name))
    }
}
