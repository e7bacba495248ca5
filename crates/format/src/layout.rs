//! Schema metadata as stored in a table file header.

use crate::codec::{decode_default, encode_default};
use crate::header::Label;
use serde_json::{Map, Value as Json};
use sylph_core::schema::{DefaultKind, TableSchema};
use sylph_core::{DataType, Error, Result};

/// Header contents of a table file. Positions are file field positions.
#[derive(Clone, Debug, PartialEq)]
pub struct FileLayout {
    pub name: String,
    pub fields: Vec<String>,
    pub types: Vec<DataType>,
    pub nullables: Vec<bool>,
    pub defaults: Vec<Option<DefaultKind>>,
    pub pk: usize,
    pub auto_increment: bool,
    pub counter: u64,
    pub indexes: Vec<usize>,
    pub uniques: Vec<usize>,
    pub data_start: usize,
}

impl FileLayout {
    /// Describes a schema laid out in its own field order.
    pub fn of(schema: &TableSchema, counter: u64) -> Self {
        Self {
            name: schema.name().into(),
            fields: schema.fields().to_vec(),
            types: schema.types().to_vec(),
            nullables: schema.nullables().to_vec(),
            defaults: schema.defaults().to_vec(),
            pk: schema.pk(),
            auto_increment: schema.is_auto_increment(),
            counter,
            indexes: schema.indexes().to_vec(),
            uniques: schema.uniques().to_vec(),
            data_start: Label::COUNT,
        }
    }

    /// Renders the header lines, in label order.
    pub fn render(&self) -> Vec<String> {
        let mut defaults = Map::new();
        let mut kinds = Map::new();
        for (pos, kind) in self.defaults.iter().enumerate() {
            if let Some(kind) = kind {
                let (tag, payload) = encode_default(kind);
                defaults.insert(pos.to_string(), Json::String(payload));
                kinds.insert(pos.to_string(), Json::String(tag.into()));
            }
        }

        Label::ALL
            .iter()
            .map(|&label| {
                let value = match label {
                    Label::Name => self.name.clone(),
                    Label::Fields => Json::from(self.fields.clone()).to_string(),
                    Label::Types => {
                        Json::from(self.types.iter().map(|t| t.tag()).collect::<Vec<_>>())
                            .to_string()
                    }
                    Label::Nullables => {
                        Json::from(self.nullables.iter().map(|&n| u8::from(n)).collect::<Vec<_>>())
                            .to_string()
                    }
                    Label::Defaults => Json::Object(defaults.clone()).to_string(),
                    Label::DefaultKind => Json::Object(kinds.clone()).to_string(),
                    Label::PrimaryKey => self.pk.to_string(),
                    Label::IsAutoIncrement => u8::from(self.auto_increment).to_string(),
                    Label::AutoIncrementValue => self.counter.to_string(),
                    Label::Indexes => Json::from(self.indexes.clone()).to_string(),
                    Label::Uniques => Json::from(self.uniques.clone()).to_string(),
                    Label::DataStart => self.data_start.to_string(),
                };
                label.render(&value)
            })
            .collect()
    }

    /// Parses the header lines. `lines` must hold at least `Label::COUNT` lines.
    pub fn parse(lines: &[&str]) -> Result<Self> {
        let header = Header { lines };

        let name = header.text(Label::Name)?.to_string();
        let fields = header
            .array(Label::Fields)?
            .iter()
            .map(|v| v.as_str().map(String::from))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| header.corrupt(Label::Fields, "expected an array of strings"))?;

        let types = header
            .array(Label::Types)?
            .iter()
            .map(|v| v.as_str().and_then(DataType::from_tag))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| header.corrupt(Label::Types, "expected an array of type tags"))?;
        header.expect_len(Label::Types, types.len(), fields.len())?;

        let nullables = header
            .array(Label::Nullables)?
            .iter()
            .map(flag)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| header.corrupt(Label::Nullables, "expected an array of 0/1 flags"))?;
        header.expect_len(Label::Nullables, nullables.len(), fields.len())?;

        let payloads = header.object(Label::Defaults)?;
        let kinds = header.object(Label::DefaultKind)?;
        let mut defaults = vec![None; fields.len()];
        for (key, tag) in &kinds {
            let pos = key
                .parse::<usize>()
                .ok()
                .filter(|&p| p < fields.len())
                .ok_or_else(|| header.corrupt(Label::DefaultKind, format!("bad field position {:?}", key)))?;
            let tag = tag
                .as_str()
                .ok_or_else(|| header.corrupt(Label::DefaultKind, "expected string tags"))?;
            let payload = payloads
                .get(key)
                .and_then(Json::as_str)
                .ok_or_else(|| header.corrupt(Label::Defaults, format!("missing payload for {}", key)))?;
            let kind = decode_default(tag, payload).map_err(|m| header.corrupt(Label::Defaults, m))?;
            defaults[pos] = Some(kind);
        }
        if let Some(key) = payloads.keys().find(|k| !kinds.contains_key(*k)) {
            return Err(header.corrupt(Label::Defaults, format!("payload {} has no kind", key)));
        }

        let pk = header.position(Label::PrimaryKey, header.text(Label::PrimaryKey)?, fields.len())?;
        let auto_increment = match header.text(Label::IsAutoIncrement)? {
            "1" => true,
            "0" => false,
            _ => return Err(header.corrupt(Label::IsAutoIncrement, "expected 0 or 1")),
        };
        let raw_counter = header.text(Label::AutoIncrementValue)?;
        let counter = raw_counter.parse::<u64>().map_err(|_| Error::InvalidCounter {
            value: raw_counter.into(),
        })?;

        let indexes = header.positions(Label::Indexes, fields.len())?;
        let uniques = header.positions(Label::Uniques, fields.len())?;

        let data_start = header
            .text(Label::DataStart)?
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= Label::COUNT)
            .ok_or_else(|| header.corrupt(Label::DataStart, "expected a line number after the header"))?;

        Ok(Self {
            name,
            fields,
            types,
            nullables,
            defaults,
            pk,
            auto_increment,
            counter,
            indexes,
            uniques,
            data_start,
        })
    }

    /// Cross-checks the header against a schema.
    ///
    /// Returns, for each file position, the schema position it maps to. Field
    /// order may differ; every per-field property must match after mapping,
    /// and index and unique lists are compared as sets.
    pub fn remap(&self, schema: &TableSchema) -> Result<Vec<usize>> {
        if self.name != schema.name() {
            return Err(Error::schema_mismatch("NAME", None, None, schema.name(), self.name.as_str()));
        }
        if self.fields.len() != schema.len() {
            return Err(Error::schema_mismatch(
                "FIELDS",
                None,
                None,
                format!("{} fields", schema.len()),
                format!("{} fields", self.fields.len()),
            ));
        }

        let mut map = Vec::with_capacity(self.fields.len());
        let mut seen = vec![false; schema.len()];
        for (i, name) in self.fields.iter().enumerate() {
            let pos = match schema.field_index(name) {
                Some(p) if !seen[p] => p,
                _ => {
                    return Err(Error::schema_mismatch(
                        "FIELDS",
                        None,
                        Some(i),
                        schema.fields().join(", "),
                        name.as_str(),
                    ))
                }
            };
            seen[pos] = true;
            map.push(pos);
        }

        for (i, &p) in map.iter().enumerate() {
            if self.types[i] != schema.types()[p] {
                return Err(Error::schema_mismatch(
                    "TYPES",
                    Some(p),
                    Some(i),
                    schema.types()[p].tag(),
                    self.types[i].tag(),
                ));
            }
            if self.nullables[i] != schema.nullables()[p] {
                return Err(Error::schema_mismatch(
                    "NULLABLES",
                    Some(p),
                    Some(i),
                    schema.nullables()[p].to_string(),
                    self.nullables[i].to_string(),
                ));
            }
            if self.defaults[i] != schema.defaults()[p] {
                return Err(Error::schema_mismatch(
                    "DEFAULTS",
                    Some(p),
                    Some(i),
                    describe(schema.defaults()[p].as_ref()),
                    describe(self.defaults[i].as_ref()),
                ));
            }
        }

        if map[self.pk] != schema.pk() {
            return Err(Error::schema_mismatch(
                "PRIMARY_KEY",
                Some(schema.pk()),
                Some(self.pk),
                schema.pk_name(),
                self.fields[self.pk].as_str(),
            ));
        }
        if self.auto_increment != schema.is_auto_increment() {
            return Err(Error::schema_mismatch(
                "IS_AUTO_INCREMENT",
                None,
                None,
                schema.is_auto_increment().to_string(),
                self.auto_increment.to_string(),
            ));
        }

        check_set("INDEXES", schema, schema.indexes(), &self.indexes, &map)?;
        check_set("UNIQUES", schema, schema.uniques(), &self.uniques, &map)?;

        Ok(map)
    }
}

fn check_set(
    property: &str,
    schema: &TableSchema,
    expected: &[usize],
    loaded: &[usize],
    map: &[usize],
) -> Result<()> {
    let mut expected = expected.to_vec();
    let mut got: Vec<usize> = loaded.iter().map(|&i| map[i]).collect();
    expected.sort_unstable();
    got.sort_unstable();
    got.dedup();
    if expected != got {
        let names = |positions: &[usize]| {
            positions
                .iter()
                .map(|&p| schema.fields()[p].as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        return Err(Error::schema_mismatch(
            property,
            None,
            None,
            format!("[{}]", names(expected.as_slice())),
            format!("[{}]", names(got.as_slice())),
        ));
    }
    Ok(())
}

fn describe(kind: Option<&DefaultKind>) -> String {
    match kind {
        None => "no default".into(),
        Some(DefaultKind::Literal(v)) => v.to_string(),
        Some(DefaultKind::Provider(name)) => format!("provider {}", name),
        Some(other) => other.tag().into(),
    }
}

fn flag(v: &Json) -> Option<bool> {
    match v.as_u64()? {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

struct Header<'a> {
    lines: &'a [&'a str],
}

impl<'a> Header<'a> {
    fn corrupt(&self, label: Label, message: impl Into<String>) -> Error {
        Error::corrupt(label.line() + 1, format!("{}: {}", label, message.into()))
    }

    fn text(&self, label: Label) -> Result<&'a str> {
        let line = self.lines[label.line()];
        label
            .strip(line)
            .ok_or_else(|| self.corrupt(label, format!("expected {} header, found {:?}", label, line)))
    }

    fn json(&self, label: Label) -> Result<Json> {
        serde_json::from_str(self.text(label)?).map_err(|e| self.corrupt(label, e.to_string()))
    }

    fn array(&self, label: Label) -> Result<Vec<Json>> {
        match self.json(label)? {
            Json::Array(items) => Ok(items),
            _ => Err(self.corrupt(label, "expected a JSON array")),
        }
    }

    fn object(&self, label: Label) -> Result<Map<String, Json>> {
        match self.json(label)? {
            Json::Object(map) => Ok(map),
            _ => Err(self.corrupt(label, "expected a JSON object")),
        }
    }

    fn position(&self, label: Label, text: &str, len: usize) -> Result<usize> {
        text.parse::<usize>()
            .ok()
            .filter(|&p| p < len)
            .ok_or_else(|| self.corrupt(label, format!("bad field position {:?}", text)))
    }

    fn positions(&self, label: Label, len: usize) -> Result<Vec<usize>> {
        self.array(label)?
            .iter()
            .map(|v| {
                v.as_u64()
                    .map(|p| p as usize)
                    .filter(|&p| p < len)
                    .ok_or_else(|| self.corrupt(label, format!("bad field position {}", v)))
            })
            .collect()
    }

    fn expect_len(&self, label: Label, got: usize, expected: usize) -> Result<()> {
        if got != expected {
            return Err(self.corrupt(label, format!("expected {} entries, found {}", expected, got)));
        }
        Ok(())
    }
}
