//! Built-in describes for common Salesforce standard objects
//!
//! Lets the generator run without an org connection, and gives tests a
//! realistic object graph: lookups, polymorphic lookups, self relationships
//! and unnamed history relationships.

use crate::schema::{
    ChildRelationship, FieldDescribe, SObjectDescribe, SalesforceFieldType, SalesforceSchema,
};

/// Schema with User, Account, Contact, Opportunity, Case, Task and AccountHistory
pub fn create_standard_schema() -> SalesforceSchema {
    SalesforceSchema::from_describes([
        create_user(),
        create_account(),
        create_contact(),
        create_opportunity(),
        create_case(),
        create_task(),
        create_account_history(),
    ])
}

/// Writable field
fn editable(name: &str, field_type: SalesforceFieldType, label: &str) -> FieldDescribe {
    FieldDescribe::new(name, field_type).with_label(label).editable()
}

/// Read-only field
fn system(name: &str, field_type: SalesforceFieldType, label: &str) -> FieldDescribe {
    FieldDescribe::new(name, field_type)
        .with_label(label)
        .with_nillable(false)
}

fn lookup(name: &str, target: &str, relationship: &str, label: &str) -> FieldDescribe {
    editable(name, SalesforceFieldType::Reference, label)
        .with_reference(target)
        .with_relationship_name(relationship)
}

fn owner_lookup() -> FieldDescribe {
    editable("OwnerId", SalesforceFieldType::Reference, "Owner ID")
        .with_nillable(false)
        .with_polymorphic_reference(vec!["User".to_string(), "Group".to_string()])
        .with_relationship_name("Owner")
}

/// Id and audit fields present on every object
fn add_system_fields(obj: &mut SObjectDescribe, id_label: &str) {
    obj.add_field(system("Id", SalesforceFieldType::Id, id_label));
    obj.add_field(system("IsDeleted", SalesforceFieldType::Boolean, "Deleted"));
    obj.add_field(
        system("CreatedById", SalesforceFieldType::Reference, "Created By ID")
            .with_reference("User")
            .with_relationship_name("CreatedBy"),
    );
    obj.add_field(system("CreatedDate", SalesforceFieldType::DateTime, "Created Date"));
    obj.add_field(
        system("LastModifiedById", SalesforceFieldType::Reference, "Last Modified By ID")
            .with_reference("User")
            .with_relationship_name("LastModifiedBy"),
    );
    obj.add_field(system(
        "LastModifiedDate",
        SalesforceFieldType::DateTime,
        "Last Modified Date",
    ));
}

fn create_user() -> SObjectDescribe {
    let mut obj = SObjectDescribe::new("User").with_label("User");
    add_system_fields(&mut obj, "User ID");

    obj.add_field(editable("Username", SalesforceFieldType::String, "Username").with_nillable(false));
    obj.add_field(editable("FirstName", SalesforceFieldType::String, "First Name"));
    obj.add_field(editable("LastName", SalesforceFieldType::String, "Last Name").with_nillable(false));
    obj.add_field(system("Name", SalesforceFieldType::String, "Full Name"));
    obj.add_field(editable("Email", SalesforceFieldType::Email, "Email").with_nillable(false));
    obj.add_field(editable("IsActive", SalesforceFieldType::Boolean, "Active"));
    obj.add_field(lookup("ManagerId", "User", "Manager", "Manager ID"));
    obj.add_field(
        editable("FederationIdentifier", SalesforceFieldType::String, "SAML Federation ID")
            .with_external_id(true),
    );

    obj.add_child_relationship(ChildRelationship::new("ManagedUsers", "User", "ManagerId"));
    obj.add_child_relationship(ChildRelationship::unnamed("AccountHistory", "CreatedById"));

    obj
}

fn create_account() -> SObjectDescribe {
    let mut obj = SObjectDescribe::new("Account").with_label("Account");
    add_system_fields(&mut obj, "Account ID");

    obj.add_field(editable("Name", SalesforceFieldType::String, "Account Name").with_nillable(false));
    obj.add_field(editable("AccountNumber", SalesforceFieldType::String, "Account Number"));
    obj.add_field(editable("Type", SalesforceFieldType::Picklist, "Account Type"));
    obj.add_field(editable("Industry", SalesforceFieldType::Picklist, "Industry"));
    obj.add_field(editable("AnnualRevenue", SalesforceFieldType::Currency, "Annual Revenue"));
    obj.add_field(editable("NumberOfEmployees", SalesforceFieldType::Int, "Employees"));
    obj.add_field(editable("Phone", SalesforceFieldType::Phone, "Account Phone"));
    obj.add_field(editable("Website", SalesforceFieldType::Url, "Website"));
    obj.add_field(editable("BillingCity", SalesforceFieldType::String, "Billing City"));
    obj.add_field(editable("BillingLocation__c", SalesforceFieldType::Location, "Billing Location"));
    obj.add_field(lookup("ParentId", "Account", "Parent", "Parent Account ID"));
    obj.add_field(owner_lookup());
    obj.add_field(editable("Description", SalesforceFieldType::TextArea, "Account Description"));
    obj.add_field(system("LastActivityDate", SalesforceFieldType::Date, "Last Activity").with_nillable(true));

    obj.add_child_relationship(ChildRelationship::new("ChildAccounts", "Account", "ParentId"));
    obj.add_child_relationship(ChildRelationship::new("Contacts", "Contact", "AccountId"));
    obj.add_child_relationship(ChildRelationship::new("Opportunities", "Opportunity", "AccountId"));
    obj.add_child_relationship(ChildRelationship::new("Cases", "Case", "AccountId"));
    obj.add_child_relationship(ChildRelationship::new("Tasks", "Task", "WhatId"));
    obj.add_child_relationship(ChildRelationship::new("Histories", "AccountHistory", "AccountId"));
    obj.add_child_relationship(
        ChildRelationship::new("Shares", "AccountShare", "AccountId").deprecated(),
    );

    obj
}

fn create_contact() -> SObjectDescribe {
    let mut obj = SObjectDescribe::new("Contact").with_label("Contact");
    add_system_fields(&mut obj, "Contact ID");

    obj.add_field(lookup("AccountId", "Account", "Account", "Account ID"));
    obj.add_field(editable("FirstName", SalesforceFieldType::String, "First Name"));
    obj.add_field(editable("LastName", SalesforceFieldType::String, "Last Name").with_nillable(false));
    obj.add_field(system("Name", SalesforceFieldType::String, "Full Name"));
    obj.add_field(editable("Email", SalesforceFieldType::Email, "Email"));
    obj.add_field(editable("Phone", SalesforceFieldType::Phone, "Business Phone"));
    obj.add_field(editable("Birthdate", SalesforceFieldType::Date, "Birthdate"));
    obj.add_field(lookup("ReportsToId", "Contact", "ReportsTo", "Reports To ID"));
    obj.add_field(owner_lookup());
    obj.add_field(
        editable("Customer_Number__c", SalesforceFieldType::String, "Customer Number")
            .with_external_id(true)
            .with_help_text("Identifier assigned by the billing system"),
    );

    obj.add_child_relationship(ChildRelationship::new("Cases", "Case", "ContactId"));
    obj.add_child_relationship(ChildRelationship::new("Tasks", "Task", "WhoId"));
    obj.add_child_relationship(ChildRelationship::new("ReportsToContacts", "Contact", "ReportsToId"));

    obj
}

fn create_opportunity() -> SObjectDescribe {
    let mut obj = SObjectDescribe::new("Opportunity").with_label("Opportunity");
    add_system_fields(&mut obj, "Opportunity ID");

    obj.add_field(lookup("AccountId", "Account", "Account", "Account ID"));
    obj.add_field(editable("Name", SalesforceFieldType::String, "Name").with_nillable(false));
    obj.add_field(editable("StageName", SalesforceFieldType::Picklist, "Stage").with_nillable(false));
    obj.add_field(editable("Amount", SalesforceFieldType::Currency, "Amount"));
    obj.add_field(editable("Probability", SalesforceFieldType::Percent, "Probability (%)"));
    obj.add_field(editable("CloseDate", SalesforceFieldType::Date, "Close Date").with_nillable(false));
    obj.add_field(system("IsClosed", SalesforceFieldType::Boolean, "Closed"));
    obj.add_field(system("IsWon", SalesforceFieldType::Boolean, "Won"));
    obj.add_field(owner_lookup());

    obj.add_child_relationship(ChildRelationship::new("Tasks", "Task", "WhatId"));

    obj
}

fn create_case() -> SObjectDescribe {
    let mut obj = SObjectDescribe::new("Case").with_label("Case");
    add_system_fields(&mut obj, "Case ID");

    obj.add_field(system("CaseNumber", SalesforceFieldType::String, "Case Number"));
    obj.add_field(lookup("AccountId", "Account", "Account", "Account ID"));
    obj.add_field(lookup("ContactId", "Contact", "Contact", "Contact ID"));
    obj.add_field(lookup("ParentId", "Case", "Parent", "Parent Case ID"));
    obj.add_field(editable("Subject", SalesforceFieldType::String, "Subject"));
    obj.add_field(editable("Status", SalesforceFieldType::Picklist, "Status"));
    obj.add_field(editable("Priority", SalesforceFieldType::Picklist, "Priority"));
    obj.add_field(editable("Origin", SalesforceFieldType::Picklist, "Case Origin"));
    obj.add_field(system("IsClosed", SalesforceFieldType::Boolean, "Closed"));
    obj.add_field(system("ClosedDate", SalesforceFieldType::DateTime, "Closed Date").with_nillable(true));
    obj.add_field(owner_lookup());

    obj.add_child_relationship(ChildRelationship::new("Cases", "Case", "ParentId"));
    obj.add_child_relationship(ChildRelationship::new("Tasks", "Task", "WhatId"));

    obj
}

fn create_task() -> SObjectDescribe {
    let mut obj = SObjectDescribe::new("Task").with_label("Task");
    add_system_fields(&mut obj, "Activity ID");

    obj.add_field(editable("Subject", SalesforceFieldType::Combobox, "Subject"));
    obj.add_field(editable("Status", SalesforceFieldType::Picklist, "Status").with_nillable(false));
    obj.add_field(editable("Priority", SalesforceFieldType::Picklist, "Priority").with_nillable(false));
    obj.add_field(editable("ActivityDate", SalesforceFieldType::Date, "Due Date Only"));
    obj.add_field(system("IsClosed", SalesforceFieldType::Boolean, "Closed"));
    obj.add_field(
        editable("WhatId", SalesforceFieldType::Reference, "Related To ID")
            .with_polymorphic_reference(vec![
                "Account".to_string(),
                "Opportunity".to_string(),
                "Case".to_string(),
            ])
            .with_relationship_name("What"),
    );
    obj.add_field(
        editable("WhoId", SalesforceFieldType::Reference, "Name ID")
            .with_polymorphic_reference(vec!["Contact".to_string(), "Lead".to_string()])
            .with_relationship_name("Who"),
    );
    obj.add_field(owner_lookup());
    obj.add_field(editable("CallDurationInSeconds", SalesforceFieldType::Int, "Call Duration"));

    obj
}

/// Field history of Account; every field is read-only
fn create_account_history() -> SObjectDescribe {
    let mut obj = SObjectDescribe::new("AccountHistory").with_label("Account History");

    obj.add_field(system("Id", SalesforceFieldType::Id, "Account History ID"));
    obj.add_field(system("IsDeleted", SalesforceFieldType::Boolean, "Deleted"));
    obj.add_field(
        system("AccountId", SalesforceFieldType::Reference, "Account ID")
            .with_reference("Account")
            .with_relationship_name("Account"),
    );
    obj.add_field(
        system("CreatedById", SalesforceFieldType::Reference, "Created By ID")
            .with_reference("User")
            .with_relationship_name("CreatedBy"),
    );
    obj.add_field(system("CreatedDate", SalesforceFieldType::DateTime, "Created Date"));
    obj.add_field(system("Field", SalesforceFieldType::Picklist, "Changed Field"));
    obj.add_field(system("OldValue", SalesforceFieldType::AnyType, "Old Value").with_nillable(true));
    obj.add_field(system("NewValue", SalesforceFieldType::AnyType, "New Value").with_nillable(true));

    obj
}
