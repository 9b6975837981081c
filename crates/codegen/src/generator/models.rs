//! Model projection.
//!
//! Each enabled projection kind (read, create, update, search) becomes
//! a filtered view of the entity's properties with its own type name.
//! The mapper and validator descriptors are shared by all of an
//! entity's models and are only allocated when at least one model was
//! produced.

use tracing::debug;

use modelgen_core::options::{DescriptorOptions, ProjectionOptions};

use crate::filter;
use crate::metadata::{Descriptor, EntityId, Model, ModelKind, SchemaContext};

use super::ModelGenerator;

impl ModelGenerator<'_> {
    pub(super) fn create_models(&mut self, context: &mut SchemaContext, id: EntityId) {
        if context.entity(id).models_processed {
            return;
        }

        let opts = self.options;

        let mut models = Vec::new();
        for (kind, projection) in [
            (ModelKind::Read, &opts.model.read as &dyn ProjectionOptions),
            (ModelKind::Create, &opts.model.create),
            (ModelKind::Update, &opts.model.update),
            (ModelKind::Search, &opts.model.search),
        ] {
            if let Some(model) = self.create_model(context, id, kind, projection) {
                models.push(model);
            }
        }

        let entity = context.entity_mut(id);

        if !models.is_empty() {
            let mapper = self.descriptor(&opts.model.mapper, &entity.entity_name);
            let validator = self.descriptor(&opts.model.validator, &entity.entity_name);

            for model in &mut models {
                model.mapper_name = mapper.name.clone();
                model.validator_name = validator.name.clone();
            }

            entity.mapper = Some(mapper);
            entity.validator = Some(validator);
        }

        entity.models = models;
        entity.models_processed = true;
    }

    fn create_model(
        &mut self,
        context: &SchemaContext,
        id: EntityId,
        kind: ModelKind,
        projection: &dyn ProjectionOptions,
    ) -> Option<Model> {
        if !projection.generate() {
            return None;
        }

        let opts = self.options;
        let shared = &opts.model.shared;
        let entity = context.entity(id);

        if filter::is_entity_ignored(&entity.entity_name, projection, shared) {
            debug!(
                entity = %entity.entity_name,
                kind = ?kind,
                "entity excluded from projection"
            );
            return None;
        }

        let properties: Vec<String> = entity
            .properties
            .iter()
            .filter(|p| {
                !filter::is_property_ignored(
                    &entity.entity_name,
                    &p.property_name,
                    projection,
                    shared,
                )
            })
            .map(|p| p.property_name.clone())
            .collect();

        let namespace = projection
            .namespace()
            .unwrap_or(shared.namespace.as_str())
            .to_string();
        let name = projection.model_name(&entity.entity_name);
        let name = self.namer.unique_scoped_name(&namespace, &name);

        Some(Model {
            kind,
            name,
            namespace,
            base_type: projection.base_type().map(str::to_string),
            attributes: projection.attributes().to_vec(),
            properties,
            mapper_name: String::new(),
            validator_name: String::new(),
        })
    }

    fn descriptor(&mut self, options: &DescriptorOptions, entity_name: &str) -> Descriptor {
        let name = options.resolve_name(entity_name);
        let name = self.namer.unique_scoped_name(&options.namespace, &name);

        Descriptor {
            name,
            namespace: options.namespace.clone(),
            base_type: options.base_type.clone(),
        }
    }
}
