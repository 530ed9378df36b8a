use schemars::generate::SchemaSettings;
use schemars::JsonSchema;
use serde_json::Value;

/// JSON schema for `T` in the subset hosted models accept as a response
/// schema: subschemas inlined, no `$schema`/`title` metadata.
pub fn response_schema<T: JsonSchema>() -> Value {
    let generator = SchemaSettings::draft2020_12()
        .with(|s| s.inline_subschemas = true)
        .into_generator();
    let mut value = serde_json::to_value(generator.into_root_schema_for::<T>())
        .unwrap_or(Value::Null);
    if let Some(obj) = value.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
        obj.remove("$defs");
    }
    value
}
