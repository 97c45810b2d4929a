use std::rc::Rc;

use dominator::{Dom, html};

use controller::auth::{AuthController, AuthKind};
use controller::config::ClientConfig;
use controller::entries::EntryListController;
use controller::page::Page;
use controller::{timestamps, Notifier};

use crate::constants::{ATTR_PAGE, TAG_DIV};
use crate::dialog::dialogs::Dialogs;
use crate::elements::app_auth::app_auth;
use crate::elements::app_entries::app_entries;
use crate::notifier::Toast;
use crate::runtime::Runtime;
use crate::utils::{body_data, location_path};

/// Picks the one controller this page declares and mounts it.
pub fn app_root() -> Dom {
    let config = ClientConfig::from_attrs(body_data);
    let toast = Toast::new();
    let dialogs = Dialogs::new();
    let notifier: Rc<dyn Notifier> = toast.clone();

    let content = match Page::resolve(body_data(ATTR_PAGE).as_deref(), &location_path()) {
        Ok(page) => {
            log::info!("mounting {page:?} with {config:?}");
            Some(page_content(page, config, notifier, dialogs.clone()))
        }
        Err(err) => {
            log::error!("{err}");
            toast.notify_when_mounted(&err.to_string(), config.notify_ms);
            None
        }
    };

    html!(TAG_DIV, {
        .class("app-root")
        .children(content)
        .child(Toast::render(toast))
        .child_signal(Dialogs::render(dialogs))
    })
}

fn page_content(page: Page, config: ClientConfig, notifier: Rc<dyn Notifier>, dialogs: Rc<Dialogs>) -> Dom {
    match page {
        Page::Login | Page::Signup => {
            let kind = if page == Page::Login { AuthKind::Login } else { AuthKind::Signup };
            let runtime = Runtime::new(AuthController::new(kind, config), notifier, dialogs);
            runtime.start();
            app_auth(kind, runtime)
        }
        Page::Entries => {
            let runtime = Runtime::new(EntryListController::new(config, timestamps::local), notifier, dialogs);
            runtime.start();
            app_entries(runtime)
        }
    }
}
