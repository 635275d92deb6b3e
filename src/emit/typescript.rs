//! TypeScript declaration emitter
//!
//! Emits, per SObject, a read-only property contract and a `RestObject`
//! subclass whose properties carry `@sField` metadata decorators.

use std::fmt::Write;

use super::context::{RUNTIME_IMPORTS, SUPER_CLASS};
use super::{DeclarationEmitter, EmitOptions, EmitResult};
use crate::declaration::{DeclaredType, FieldMetadata, ObjectDeclaration};
use crate::generate::ClassIndex;

/// Buffers a TypeScript module of generated declarations
#[derive(Debug, Clone, Default)]
pub struct TypeScriptEmitter {
    options: EmitOptions,
    output: String,
}

impl TypeScriptEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EmitOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    /// Text emitted so far
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn emit_contract(&mut self, decl: &ObjectDeclaration, index: &ClassIndex) -> EmitResult<()> {
        let ind = &self.options.indent;
        let out = &mut self.output;

        write_doc(out, "", &format!("Immutable Property Interface for {}", decl.class_name))?;
        writeln!(out, "export interface {} {{", decl.contract_name)?;
        writeln!(out, "{}readonly _TYPE_?: {};", ind, quote(&decl.api_name))?;
        for prop in &decl.properties {
            writeln!(
                out,
                "{}readonly {}?: {};",
                ind,
                prop.name,
                contract_type(&prop.declared_type, index)
            )?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
        Ok(())
    }

    fn emit_class(&mut self, decl: &ObjectDeclaration) -> EmitResult<()> {
        let ind = &self.options.indent;
        let out = &mut self.output;
        let class = &decl.class_name;
        let contract = &decl.contract_name;
        let api_name = quote(&decl.api_name);

        write_doc(out, "", &format!("Generated class for {}", decl.api_name))?;
        writeln!(
            out,
            "export class {} extends {} implements {} {{",
            class, SUPER_CLASS, contract
        )?;

        for prop in &decl.properties {
            if let Some(docs) = &prop.docs {
                write_doc(out, ind, docs)?;
            }
            writeln!(out, "{}{}", ind, sfield_decorator(&prop.metadata))?;
            writeln!(
                out,
                "{}public {}: {};",
                ind,
                prop.name,
                class_type(&prop.declared_type)
            )?;
        }
        if !decl.properties.is_empty() {
            writeln!(out)?;
        }

        // constructor: every property starts explicitly unset, then takes supplied values
        writeln!(out, "{}constructor(fields?: {}) {{", ind, contract)?;
        writeln!(out, "{ind}{ind}super({});", api_name)?;
        for prop in &decl.properties {
            writeln!(out, "{ind}{ind}this.{} = void 0;", prop.name)?;
        }
        writeln!(out, "{ind}{ind}Object.assign(this, fields);")?;
        writeln!(out, "{}}}", ind)?;
        writeln!(out)?;

        writeln!(out, "{}public static API_NAME: {} = {};", ind, api_name, api_name)?;
        writeln!(out, "{}public _TYPE_: {} = {};", ind, api_name, api_name)?;
        writeln!(
            out,
            "{}private static _fields: {{ [P in keyof {}]: SFieldProperties; }};",
            ind, contract
        )?;
        writeln!(out)?;

        writeln!(out, "{}public static get FIELDS() {{", ind)?;
        writeln!(
            out,
            "{ind}{ind}return this._fields = this._fields ? this._fields : {class}.getPropertiesMeta<{contract}, {class}>({class});"
        )?;
        writeln!(out, "{}}}", ind)?;
        writeln!(out)?;

        writeln!(
            out,
            "{}public static async retrieve(qry: string): Promise<{}[]> {{",
            ind, class
        )?;
        writeln!(
            out,
            "{ind}{ind}return await {SUPER_CLASS}.query<{class}>({class}, qry);"
        )?;
        writeln!(out, "{}}}", ind)?;
        writeln!(out)?;

        writeln!(out, "{}public static fromSFObject(sob: SObject): {} {{", ind, class)?;
        writeln!(out, "{ind}{ind}return new {class}().mapFromQuery(sob);")?;
        writeln!(out, "{}}}", ind)?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        Ok(())
    }
}

impl DeclarationEmitter for TypeScriptEmitter {
    fn begin(&mut self) -> EmitResult<()> {
        if self.options.include_imports {
            writeln!(
                self.output,
                "import {{ {} }} from {};",
                RUNTIME_IMPORTS.join(", "),
                quote(&self.options.runtime_module)
            )?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn emit_object(&mut self, declaration: &ObjectDeclaration, index: &ClassIndex) -> EmitResult<()> {
        self.emit_contract(declaration, index)?;
        self.emit_class(declaration)
    }
}

/// TypeScript type of a class property
pub fn class_type(declared: &DeclaredType) -> String {
    match declared {
        DeclaredType::String => "string".to_string(),
        DeclaredType::Boolean => "boolean".to_string(),
        DeclaredType::Number => "number".to_string(),
        DeclaredType::Date => "Date".to_string(),
        DeclaredType::Location => "SFLocation".to_string(),
        DeclaredType::Name => "Name".to_string(),
        DeclaredType::Class(class) => class.clone(),
        DeclaredType::ClassArray(class) => format!("{}[]", class),
    }
}

/// TypeScript type of a contract property; generated classes become their contracts
pub fn contract_type(declared: &DeclaredType, index: &ClassIndex) -> String {
    match declared {
        DeclaredType::Class(class) => index.contract_for(class).unwrap_or(class).to_string(),
        DeclaredType::ClassArray(class) => {
            format!("{}[]", index.contract_for(class).unwrap_or(class))
        }
        other => class_type(other),
    }
}

/// `@sField({...})` decorator carrying a property's metadata
pub fn sfield_decorator(meta: &FieldMetadata) -> String {
    let reference = match &meta.reference {
        Some(r) => format!("() => {{ return {} }}", r.class_name()),
        None => "undefined".to_string(),
    };

    format!(
        "@sField({{ apiName: {}, createable: {}, updateable: {}, required: {}, reference: {}, childRelationship: {}, salesforceType: SalesforceFieldType.{}, salesforceLabel: {}, externalId: {} }})",
        quote(&meta.api_name),
        meta.createable,
        meta.updateable,
        meta.required,
        reference,
        meta.child_relationship,
        meta.salesforce_type.enum_member(),
        quote(&meta.salesforce_label),
        meta.external_id
    )
}

/// Single-quoted string literal
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

fn write_doc(out: &mut String, indent: &str, text: &str) -> EmitResult<()> {
    writeln!(out, "{}/**", indent)?;
    for line in text.lines() {
        let line = line.trim_end().replace("*/", "*\\/");
        if line.is_empty() {
            writeln!(out, "{} *", indent)?;
        } else {
            writeln!(out, "{} * {}", indent, line)?;
        }
    }
    writeln!(out, "{} */", indent)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::PropertyDescriptor;
    use crate::schema::SalesforceFieldType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("Owner's Name"), "'Owner\\'s Name'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_decorator_text() {
        let meta = FieldMetadata {
            api_name: "Name".into(),
            createable: true,
            updateable: true,
            required: true,
            external_id: false,
            child_relationship: false,
            salesforce_type: SalesforceFieldType::String,
            salesforce_label: "Account Name".into(),
            reference: None,
        };
        assert_eq!(
            sfield_decorator(&meta),
            "@sField({ apiName: 'Name', createable: true, updateable: true, required: true, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.STRING, salesforceLabel: 'Account Name', externalId: false })"
        );

        let rel = FieldMetadata::relationship("Contacts", "Contacts", "Contact", true);
        assert!(sfield_decorator(&rel).contains("reference: () => { return Contact }"));
        assert!(sfield_decorator(&rel).contains("childRelationship: true"));
    }

    #[test]
    fn test_doc_comment_is_closed_safely() {
        let mut out = String::new();
        write_doc(&mut out, "  ", "first */ line\nsecond").unwrap();
        assert_eq!(out, "  /**\n   * first *\\/ line\n   * second\n   */\n");
    }

    #[test]
    fn test_emit_empty_object() {
        let index = ClassIndex::build(&[crate::config::SObjectConfig::new("Thing__c")]);
        let decl = ObjectDeclaration::new("Thing__c", "Thing", "ThingFields", Vec::<PropertyDescriptor>::new());

        let mut emitter = TypeScriptEmitter::with_options(EmitOptions::default().without_imports());
        emitter.begin().unwrap();
        emitter.emit_object(&decl, &index).unwrap();
        emitter.finish().unwrap();

        let expected = "\
/**
 * Immutable Property Interface for Thing
 */
export interface ThingFields {
    readonly _TYPE_?: 'Thing__c';
}

/**
 * Generated class for Thing__c
 */
export class Thing extends RestObject implements ThingFields {
    constructor(fields?: ThingFields) {
        super('Thing__c');
        Object.assign(this, fields);
    }

    public static API_NAME: 'Thing__c' = 'Thing__c';
    public _TYPE_: 'Thing__c' = 'Thing__c';
    private static _fields: { [P in keyof ThingFields]: SFieldProperties; };

    public static get FIELDS() {
        return this._fields = this._fields ? this._fields : Thing.getPropertiesMeta<ThingFields, Thing>(Thing);
    }

    public static async retrieve(qry: string): Promise<Thing[]> {
        return await RestObject.query<Thing>(Thing, qry);
    }

    public static fromSFObject(sob: SObject): Thing {
        return new Thing().mapFromQuery(sob);
    }
}

";
        assert_eq!(emitter.output(), expected);
    }
}
