//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::controller::Controller;
use crate::dialogs::BrowserDialogs;
use crate::store::AppStore;

pub type AppController = Controller<HttpApi, BrowserDialogs>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive mirror of the controller's state
    pub store: AppStore,
    /// The controller is `!Send`, so it lives in local storage
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, controller: AppController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn controller(&self) -> Rc<AppController> {
        self.controller.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
