//! Endpoint descriptor generation.
//!
//! Endpoints sit on top of the model projections: each kind needs the
//! model it carries on the wire, so a kind whose backing model was
//! filtered out (or an entity with no models at all) produces nothing.

use tracing::debug;

use modelgen_core::options::ApiOptions;

use crate::metadata::{Endpoint, EndpointKind, EntityId, ModelKind, SchemaContext};

use super::ModelGenerator;

impl ModelGenerator<'_> {
    pub(super) fn create_endpoints(&mut self, context: &mut SchemaContext, id: EntityId) {
        if context.entity(id).endpoints_processed {
            return;
        }

        let opts = self.options;

        if !opts.endpoint.any_enabled() || context.entity(id).models.is_empty() {
            context.entity_mut(id).endpoints_processed = true;
            return;
        }

        let read_model = context
            .entity(id)
            .model(ModelKind::Read)
            .map(|m| m.name.clone());

        let mut endpoints = Vec::new();
        for (kind, api, request_kind) in [
            (EndpointKind::Retrieve, &opts.endpoint.retrieve, None),
            (EndpointKind::Create, &opts.endpoint.create, Some(ModelKind::Create)),
            (EndpointKind::Update, &opts.endpoint.update, Some(ModelKind::Update)),
            (EndpointKind::Delete, &opts.endpoint.delete, None),
            (EndpointKind::Search, &opts.endpoint.search, Some(ModelKind::Search)),
        ] {
            if !api.generate {
                continue;
            }

            let request_model = match request_kind {
                Some(model_kind) => {
                    match context.entity(id).model(model_kind) {
                        Some(model) => Some(model.name.clone()),
                        None => {
                            debug!(
                                entity = %context.entity(id).entity_name,
                                kind = ?kind,
                                "skipping endpoint; backing model was not generated"
                            );
                            continue;
                        }
                    }
                }
                None => None,
            };

            // retrieval needs a read model to return; delete returns nothing
            let response_model = match kind {
                EndpointKind::Delete => None,
                _ => match &read_model {
                    Some(name) => Some(name.clone()),
                    None => {
                        debug!(
                            entity = %context.entity(id).entity_name,
                            kind = ?kind,
                            "skipping endpoint; no read model to respond with"
                        );
                        continue;
                    }
                },
            };

            let endpoint = self.create_endpoint(context, id, kind, api, request_model, response_model);
            endpoints.push(endpoint);
        }

        let entity = context.entity_mut(id);
        entity.endpoints = endpoints;
        entity.endpoints_processed = true;
    }

    fn create_endpoint(
        &mut self,
        context: &SchemaContext,
        id: EntityId,
        kind: EndpointKind,
        api: &ApiOptions,
        request_model: Option<String>,
        response_model: Option<String>,
    ) -> Endpoint {
        let namespace = api
            .namespace
            .as_deref()
            .unwrap_or(self.options.endpoint.namespace.as_str())
            .to_string();
        let name = api.resolve_name(&context.entity(id).entity_name);
        let name = self.namer.unique_scoped_name(&namespace, &name);

        Endpoint {
            kind,
            name,
            namespace,
            base_type: api.base_type.clone(),
            request_model,
            response_model,
        }
    }
}
