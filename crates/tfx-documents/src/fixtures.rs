//! Sample LC terms and documents that pass every check against each other.

use crate::bill_of_lading::{BillOfLading, BillOfLadingRow};
use crate::invoice::{Invoice, InvoiceRow};
use crate::lc_terms::LcTerms;
use crate::packing_list::{PackingList, PackingListRow};

pub(crate) fn sample_terms() -> LcTerms {
    LcTerms {
        sender: "Importer Bank".into(),
        receiver: "Exporter Bank".into(),
        tag20: "LC-001".into(),
        tag27: "1/1".into(),
        tag31c: "01/01/2020".into(),
        tag31d: "06/30/2020 Singapore".into(),
        tag32b: "USD1000".into(),
        tag39a: "10/10".into(),
        tag40a: "Irrevocable".into(),
        tag41a: "Any bank by negotiation".into(),
        tag42c: "Sight".into(),
        tag42d: "Issuing bank".into(),
        tag43p: "Not allowed".into(),
        tag43t: "Allowed".into(),
        tag44a: "Shanghai".into(),
        tag44b: "Singapore".into(),
        tag44c: "03/31/2020".into(),
        tag44e: "Shanghai".into(),
        tag44f: "Singapore".into(),
        tag45a: "Air compressors".into(),
        tag46a: "BL, Invoice, Packing list".into(),
        tag47a: "None".into(),
        tag48: "21 days".into(),
        tag49: "Without".into(),
        tag50: "Importer Ltd".into(),
        tag57d: "Advising bank".into(),
        tag59: "Exporter Ltd".into(),
        tag71b: "All charges for beneficiary".into(),
    }
}

pub(crate) fn sample_bill_of_lading() -> BillOfLading {
    BillOfLading {
        scac: "MAEU".into(),
        bl_no: Some(100234),
        booking_no: Some(55012),
        export_references: "EXP-77".into(),
        svc_contract: "SC-2020-9".into(),
        onward_inland_routing: "Rail to Jurong".into(),
        shipper_name_address: "Exporter Ltd, Shanghai".into(),
        consignee_name_address: "Importer Ltd, Singapore".into(),
        vessel: "Maersk Kowloon".into(),
        voyage_no: Some(412),
        port_of_loading: "Shanghai".into(),
        port_of_discharge: "Singapore".into(),
        place_of_receipt: "Shanghai CY".into(),
        place_of_delivery: "Singapore CY".into(),
        rows: vec![BillOfLadingRow {
            description_of_goods: "Air compressors".into(),
            weight: 1200,
            measurement: 30,
        }],
        freight_and_charges: Some(150),
        rate: Some(3),
        unit: Some(50),
        currency: "USD".into(),
        prepaid: "Yes".into(),
        total_containers_received_by_carrier: Some(1),
        container_number: "MSKU1234565".into(),
        place_of_issue_of_bl: "Shanghai".into(),
        number_and_sequence_of_original_bls: "3/3".into(),
        date_of_issue_of_bl: "03/01/2020".into(),
        declared_value: Some(1000),
        shipper_on_board_date: "03/01/2020".into(),
        signed_by: "Carrier agent".into(),
        lc_number: "LC-001".into(),
        date_of_presentation: "03/15/2020".into(),
    }
}

pub(crate) fn sample_invoice() -> Invoice {
    Invoice {
        payer: "Importer Ltd".into(),
        payee: "Exporter Ltd".into(),
        tax_registry_no: Some(9_100_234),
        invoice_code: Some(3100),
        invoice_number: Some(20_200_301),
        printing_no: Some(1),
        rows: vec![InvoiceRow {
            service: "Air compressors".into(),
            item: 10,
            amount_charged: 1000,
            remarks: "FOB Shanghai".into(),
        }],
        total_in_words: "One thousand".into(),
        total_in_figures: Some(1000),
        print_no: Some(1),
        anti_forgery_code: "AF-998".into(),
        date_issued: "03/01/2020".into(),
        due_date: "04/30/2020".into(),
        shipping_date: "03/01/2020".into(),
        lc_number: "LC-001".into(),
        date_of_presentation: "03/15/2020".into(),
        currency: "USD".into(),
    }
}

pub(crate) fn sample_packing_list() -> PackingList {
    PackingList {
        consignee_name: "Importer Ltd".into(),
        consignee_address: "1 Harbour Road, Singapore".into(),
        packing_list_no: "PL-17".into(),
        date: "03/01/2020".into(),
        rows: vec![PackingListRow {
            description_of_goods: "Air compressors".into(),
            quantity_mtons: 1,
            net_weight_kgs: 1100,
            gross_weight_kgs: 1200,
        }],
        total_quantity_mtons: Some(1),
        total_net_weight_kgs: Some(1100),
        total_gross_weight_kgs: Some(1200),
        delivery_terms: "FOB".into(),
        documentary_credit_number: "LC-001".into(),
        method_of_loading: "Container".into(),
        container_number: "MSKU1234565".into(),
        port_of_loading: "Shanghai".into(),
        port_of_discharge: "Singapore".into(),
        date_of_presentation: "03/15/2020".into(),
    }
}
