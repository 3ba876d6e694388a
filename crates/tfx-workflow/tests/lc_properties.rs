//! Random operation sequences never leave an LC in an inconsistent state.

mod common;

use common::*;
use proptest::prelude::*;
use tfx_core::ContractId;
use tfx_state::{LcMachine, LcStatus, StatusMachine};
use tfx_store::{MemoryStore, RecordKey, RecordStore};
use tfx_workflow::{AllowAll, TradeFinanceWorkflow};

#[derive(Debug, Clone, Copy)]
enum Op {
    Accept,
    Reject,
    Resubmit,
    AcceptToPay,
    Pay,
    Default,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Accept),
        Just(Op::Reject),
        Just(Op::Resubmit),
        Just(Op::AcceptToPay),
        Just(Op::Pay),
        Just(Op::Default),
    ]
}

fn apply(workflow: &TradeFinanceWorkflow<MemoryStore, AllowAll>, op: Op) -> bool {
    let result = match op {
        Op::Accept => workflow.accept_lc(UID),
        Op::Reject => workflow.reject_lc(UID),
        Op::Resubmit => workflow.resubmit_lc(UID, &lc_json(), b"", "resubmitted"),
        Op::AcceptToPay => workflow.accept_to_pay(UID),
        Op::Pay => workflow.payment_received(UID),
        Op::Default => workflow.defaulted_on_payment(UID),
    };
    result.is_ok()
}

proptest! {
    #[test]
    fn status_tracks_transition_log(ops in prop::collection::vec(op(), 1..24)) {
        let (workflow, _) = open_workflow();
        submit_contract(&workflow, UID);
        let uid = ContractId::new(UID).unwrap();
        let mut applied = 0usize;
        let mut resubmissions = 0u32;

        for op in ops {
            let before = workflow.get_lc_status(UID).unwrap().unwrap();
            if apply(&workflow, op) {
                applied += 1;
                if matches!(op, Op::Resubmit) {
                    resubmissions += 1;
                }
                let after = workflow.get_lc_status(UID).unwrap().unwrap();
                prop_assert!(LcMachine::permits(before, after));
            } else {
                prop_assert_eq!(workflow.get_lc_status(UID).unwrap(), Some(before));
            }
        }

        let pointer = workflow
            .store()
            .get(&RecordKey::lc_pointer(&uid))
            .unwrap()
            .into_lc_pointer()
            .unwrap();
        prop_assert_eq!(pointer.transitions.len(), applied);
        prop_assert_eq!(pointer.latest_revision, resubmissions);
        prop_assert_eq!(workflow.get_lc_history(UID).unwrap().len() as u32, resubmissions + 1);
        let expected = pointer
            .transitions
            .last()
            .map_or(LcStatus::SubmittedByIb, |t| t.to_status);
        prop_assert_eq!(pointer.status, expected);
    }
}
