//! In-memory host capabilities for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::StoreError;
use crate::requests::{ActionResult, ConnectionRequest, ListQuery, SUCCESS_CODE};
use crate::store::{ConnectionInvoker, RecordStore};

/// Successful mutation result reporting `id`.
pub fn accepted(id: &str) -> ActionResult {
    ActionResult {
        code: SUCCESS_CODE.to_string(),
        message: String::new(),
        status: "success".to_string(),
        details: json!({ "id": id }),
    }
}

pub struct FakeInvoker {
    response: Value,
    calls: RefCell<Vec<(String, ConnectionRequest)>>,
}

impl FakeInvoker {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, ConnectionRequest)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ConnectionInvoker for FakeInvoker {
    async fn invoke(
        &self,
        connection: &str,
        request: &ConnectionRequest,
    ) -> Result<Value, StoreError> {
        self.calls
            .borrow_mut()
            .push((connection.to_string(), request.clone()));
        Ok(self.response.clone())
    }
}

/// A call recorded by [`FakeRecordStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ListQuery),
    Insert { entity: String, data: Value, triggers: Vec<String> },
    Update { entity: String, id: String, data: Value, triggers: Vec<String> },
    Delete { entity: String, id: String },
}

/// Records every call and answers mutations from a queue of canned results
/// (defaulting to a single success entry).
#[derive(Default)]
pub struct FakeRecordStore {
    records: Vec<Value>,
    replies: RefCell<VecDeque<Result<Vec<ActionResult>, StoreError>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeRecordStore {
    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn reply(&self, reply: Result<Vec<ActionResult>, StoreError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next_reply(&self) -> Result<Vec<ActionResult>, StoreError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![accepted("1000")]))
    }
}

#[async_trait(?Send)]
impl RecordStore for FakeRecordStore {
    async fn list_all(&self, query: &ListQuery) -> Result<Vec<Value>, StoreError> {
        self.calls.borrow_mut().push(Call::List(query.clone()));
        Ok(self.records.clone())
    }

    async fn insert(
        &self,
        entity: &str,
        data: Value,
        triggers: &[String],
    ) -> Result<Vec<ActionResult>, StoreError> {
        self.calls.borrow_mut().push(Call::Insert {
            entity: entity.to_string(),
            data,
            triggers: triggers.to_vec(),
        });
        self.next_reply()
    }

    async fn update(
        &self,
        entity: &str,
        id: &str,
        data: Value,
        triggers: &[String],
    ) -> Result<Vec<ActionResult>, StoreError> {
        self.calls.borrow_mut().push(Call::Update {
            entity: entity.to_string(),
            id: id.to_string(),
            data,
            triggers: triggers.to_vec(),
        });
        self.next_reply()
    }

    async fn delete(&self, entity: &str, id: &str) -> Result<Vec<ActionResult>, StoreError> {
        self.calls.borrow_mut().push(Call::Delete {
            entity: entity.to_string(),
            id: id.to_string(),
        });
        self.next_reply()
    }
}
