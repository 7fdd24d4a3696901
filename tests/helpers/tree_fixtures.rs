//! Signature trees shaped like a parsed web service description.

use idocit::structure::{ElementId, NewElement, ParameterType, SignatureTree};

pub struct CustomerService {
    pub tree: SignatureTree,
    pub artifact: ElementId,
    pub port_type: ElementId,
    pub operation: ElementId,
    pub input: ElementId,
    pub customer: ElementId,
    pub street: ElementId,
    pub fault: ElementId,
}

/// `CustomerService.wsdl` with a single `moveCustomer` operation taking a
/// customer and declaring one fault.
pub fn customer_service() -> CustomerService {
    let mut tree = SignatureTree::new();
    let artifact = tree
        .create(None, NewElement::artifact("WSDL").with_identifier("CustomerService.wsdl"))
        .unwrap();
    let port_type = tree
        .create(
            Some(artifact),
            NewElement::interface("PortType").with_identifier("CustomerServicePortType"),
        )
        .unwrap();
    let operation = tree
        .create(
            Some(port_type),
            NewElement::operation("Operation").with_identifier("moveCustomer"),
        )
        .unwrap();
    let input = tree
        .create(
            Some(operation),
            NewElement::parameters("Input Message", ParameterType::Input)
                .with_identifier("moveCustomerRequest"),
        )
        .unwrap();
    let customer = tree
        .create(
            Some(input),
            NewElement::parameter("Part", Some("Customer"))
                .with_identifier("customer")
                .with_qualified_identifier("customer"),
        )
        .unwrap();
    let street = tree
        .create(
            Some(customer),
            NewElement::parameter("Element", Some("String"))
                .with_identifier("street")
                .with_qualified_identifier("street"),
        )
        .unwrap();
    let faults = tree
        .create(
            Some(operation),
            NewElement::parameters("Fault Message", ParameterType::Exception),
        )
        .unwrap();
    let fault = tree
        .create(
            Some(faults),
            NewElement::parameter("Part", Some("UnknownCustomer")).with_identifier("fault"),
        )
        .unwrap();

    CustomerService {
        tree,
        artifact,
        port_type,
        operation,
        input,
        customer,
        street,
        fault,
    }
}
