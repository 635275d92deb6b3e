//! Runtime contract targeted by generated declarations
//!
//! Generated classes extend the runtime's `RestObject`. This crate does not
//! implement the runtime; these constants name what the output relies on.

/// Base class of every generated class
pub const SUPER_CLASS: &str = "RestObject";

/// Default module the runtime is imported from
pub const DEFAULT_RUNTIME_MODULE: &str = "ts-force";

/// Names imported from the runtime module, in import order
pub const RUNTIME_IMPORTS: [&str; 7] = [
    "RestObject",
    "SObject",
    "sField",
    "SalesforceFieldType",
    "SFLocation",
    "SFieldProperties",
    "Name",
];

/// The TypeScript surface the runtime must provide:
///
/// ```typescript
/// abstract class RestObject {
///   constructor(apiName: string);
///   static query<T extends RestObject>(type: new () => T, qry: string): Promise<T[]>;
///   static getPropertiesMeta<F, T extends RestObject>(type: new () => T): { [P in keyof F]: SFieldProperties };
///   mapFromQuery(sob: SObject): this;
/// }
/// function sField(props: SFieldProperties): PropertyDecorator;
/// ```
pub const RUNTIME_INTERFACE: &str = r#"
export declare abstract class RestObject {
  constructor(apiName: string);
  static query<T extends RestObject>(type: new () => T, qry: string): Promise<T[]>;
  static getPropertiesMeta<F, T extends RestObject>(type: new () => T): { [P in keyof F]: SFieldProperties };
  mapFromQuery(sob: SObject): this;
}

export interface SFieldProperties {
  apiName: string;
  createable: boolean;
  updateable: boolean;
  required: boolean;
  externalId: boolean;
  childRelationship: boolean;
  reference: () => any;
  salesforceType: SalesforceFieldType;
  salesforceLabel: string;
}

export declare function sField(props: SFieldProperties): PropertyDecorator;
"#;
