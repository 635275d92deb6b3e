//! Generation over the built-in standard object schema

use pretty_assertions::assert_eq;
use sobgen::{
    create_standard_schema, generate_typescript, DeclaredType, EmitOptions, SObjectConfig,
    SObjectGenerator, TypeScriptEmitter,
};

fn configs(names: &[&str]) -> Vec<SObjectConfig> {
    names.iter().map(|n| SObjectConfig::new(*n)).collect()
}

#[tokio::test]
async fn test_account_history_module() {
    let output = generate_typescript(
        configs(&["AccountHistory", "Account"]),
        &create_standard_schema(),
        EmitOptions::default().without_imports(),
    )
    .await
    .unwrap();

    let end = output
        .find("/**\n * Immutable Property Interface for Account\n")
        .unwrap();

    let expected = "\
/**
 * Immutable Property Interface for AccountHistory
 */
export interface AccountHistoryFields {
    readonly _TYPE_?: 'AccountHistory';
    readonly id?: string;
    readonly isDeleted?: boolean;
    readonly account?: AccountFields;
    readonly accountId?: string;
    readonly createdById?: string;
    readonly createdDate?: Date;
    readonly field?: string;
    readonly oldValue?: string;
    readonly newValue?: string;
}

/**
 * Generated class for AccountHistory
 */
export class AccountHistory extends RestObject implements AccountHistoryFields {
    @sField({ apiName: 'Id', createable: false, updateable: false, required: false, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.ID, salesforceLabel: 'Account History ID', externalId: false })
    public id: string;
    @sField({ apiName: 'IsDeleted', createable: false, updateable: false, required: false, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.BOOLEAN, salesforceLabel: 'Deleted', externalId: false })
    public isDeleted: boolean;
    @sField({ apiName: 'Account', createable: false, updateable: false, required: false, reference: () => { return Account }, childRelationship: false, salesforceType: SalesforceFieldType.REFERENCE, salesforceLabel: 'Account ID', externalId: false })
    public account: Account;
    @sField({ apiName: 'AccountId', createable: false, updateable: false, required: false, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.REFERENCE, salesforceLabel: 'Account ID', externalId: false })
    public accountId: string;
    @sField({ apiName: 'CreatedById', createable: false, updateable: false, required: false, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.REFERENCE, salesforceLabel: 'Created By ID', externalId: false })
    public createdById: string;
    @sField({ apiName: 'CreatedDate', createable: false, updateable: false, required: false, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.DATETIME, salesforceLabel: 'Created Date', externalId: false })
    public createdDate: Date;
    @sField({ apiName: 'Field', createable: false, updateable: false, required: false, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.PICKLIST, salesforceLabel: 'Changed Field', externalId: false })
    public field: string;
    @sField({ apiName: 'OldValue', createable: false, updateable: false, required: false, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.ANYTYPE, salesforceLabel: 'Old Value', externalId: false })
    public oldValue: string;
    @sField({ apiName: 'NewValue', createable: false, updateable: false, required: false, reference: undefined, childRelationship: false, salesforceType: SalesforceFieldType.ANYTYPE, salesforceLabel: 'New Value', externalId: false })
    public newValue: string;

    constructor(fields?: AccountHistoryFields) {
        super('AccountHistory');
        this.id = void 0;
        this.isDeleted = void 0;
        this.account = void 0;
        this.accountId = void 0;
        this.createdById = void 0;
        this.createdDate = void 0;
        this.field = void 0;
        this.oldValue = void 0;
        this.newValue = void 0;
        Object.assign(this, fields);
    }

    public static API_NAME: 'AccountHistory' = 'AccountHistory';
    public _TYPE_: 'AccountHistory' = 'AccountHistory';
    private static _fields: { [P in keyof AccountHistoryFields]: SFieldProperties; };

    public static get FIELDS() {
        return this._fields = this._fields ? this._fields : AccountHistory.getPropertiesMeta<AccountHistoryFields, AccountHistory>(AccountHistory);
    }

    public static async retrieve(qry: string): Promise<AccountHistory[]> {
        return await RestObject.query<AccountHistory>(AccountHistory, qry);
    }

    public static fromSFObject(sob: SObject): AccountHistory {
        return new AccountHistory().mapFromQuery(sob);
    }
}

";
    assert_eq!(&output[..end], expected);

    // Account links back through its Histories child relationship
    assert!(output.contains("    readonly histories?: AccountHistoryFields[];\n"));
    assert!(output.contains("    public histories: AccountHistory[];\n"));
}

#[tokio::test]
async fn test_account_skips_self_and_deprecated_children() {
    let generator = SObjectGenerator::new(configs(&["Account", "Contact", "Opportunity", "Case"]));
    let mut emitter = TypeScriptEmitter::new();
    generator.generate(&create_standard_schema(), &mut emitter).await.unwrap();

    let account = generator
        .generate_object(&generator.configs()[0], &create_standard_schema())
        .await
        .unwrap();
    let child_lists: Vec<_> = account
        .properties
        .iter()
        .filter(|p| p.metadata.child_relationship)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(child_lists, vec!["contacts", "opportunities", "cases"]);

    // ParentId is a lookup to Account itself, which keeps its relationship property
    assert_eq!(
        account.property("parent").unwrap().declared_type,
        DeclaredType::Class("Account".into())
    );
    assert!(!emitter.output().contains("childAccounts"));
    assert!(!emitter.output().contains("shares"));
}

#[tokio::test]
async fn test_task_polymorphic_lookups() {
    let generator = SObjectGenerator::new(configs(&["Task", "Account", "Contact"]));
    let task = generator
        .generate_object(&generator.configs()[0], &create_standard_schema())
        .await
        .unwrap();

    for relationship in ["what", "who"] {
        let prop = task.property(relationship).unwrap();
        assert_eq!(prop.declared_type, DeclaredType::Name, "{}", relationship);
        assert_eq!(prop.metadata.reference.as_ref().unwrap().class_name(), "Name");
    }
    assert!(task.property("whatId").is_some());
    assert!(task.property("whoId").is_some());

    // Owner targets User and Group, neither of which is generated
    assert!(task.property("owner").is_none());
    assert!(task.property("ownerId").is_some());
}

#[tokio::test]
async fn test_contact_external_id_and_help_text() {
    let generator = SObjectGenerator::new(configs(&["Contact"]));
    let contact = generator
        .generate_object(&generator.configs()[0], &create_standard_schema())
        .await
        .unwrap();

    let external = contact
        .properties
        .iter()
        .find(|p| p.metadata.external_id)
        .unwrap();
    assert!(external.docs.is_some());
}
