//! One form session.
//!
//! [`OrderForm`] owns a single draft (no sharing, no locking) together with
//! the reference datasets and the live validation map. Dropping the form
//! discards the draft; nothing is persisted until [`OrderForm::submit`]
//! succeeds.

use chrono::NaiveDate;
use tracing::error;

use crate::domain::capacity;
use crate::domain::draft::OrderDraft;
use crate::domain::validation::{validate, FieldErrors};
use crate::payload::OrderPayload;
use crate::ports::{ClientDirectory, Notifier, OrderGateway, ProductCatalog, SalesFeed};
use crate::reference::{Client, Product, Sale};
use crate::{Result, SubmitError};

pub struct OrderForm {
    draft: OrderDraft,
    clients: Vec<Client>,
    products: Vec<Product>,
    sales: Vec<Sale>,
    sales_loaded: bool,
    errors: FieldErrors,
}

impl OrderForm {
    /// Opens a session over the given reference lists with a fresh draft.
    pub fn new(clients: Vec<Client>, products: Vec<Product>) -> Self {
        Self {
            draft: OrderDraft::new(),
            clients,
            products,
            sales: vec![],
            sales_loaded: false,
            errors: FieldErrors::default(),
        }
    }

    /// Fetches all reference data and opens a session. Any fetch failure is
    /// logged and degrades to an empty dataset; the form stays usable.
    pub async fn open(
        directory: &dyn ClientDirectory,
        catalog: &dyn ProductCatalog,
        feed: &dyn SalesFeed,
    ) -> Self {
        let clients = directory.list_clients().await.unwrap_or_else(|e| {
            error!("failed to fetch clients: {e}");
            vec![]
        });
        let products = catalog.list_products().await.unwrap_or_else(|e| {
            error!("failed to fetch products: {e}");
            vec![]
        });
        let mut form = Self::new(clients, products);
        form.load_sales(feed).await;
        form
    }

    /// Loads historical sales for the capacity gate. A fetch failure is
    /// logged and leaves the feed empty, so the gate then sees no committed
    /// quantity for any date.
    pub async fn load_sales(&mut self, feed: &dyn SalesFeed) {
        match feed.list_sales().await {
            Ok(sales) => self.sales = sales,
            Err(e) => error!("failed to fetch sales: {e}"),
        }
        self.sales_loaded = true;
    }

    pub fn sales_loaded(&self) -> bool {
        self.sales_loaded
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Validation state as of the last edit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Clients offered for selection; inactive ones are never listed.
    pub fn active_clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter().filter(|c| c.active)
    }

    /// Products offered for selection; inactive ones are never listed.
    pub fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.active)
    }

    pub fn set_client(&mut self, client_id: i32) {
        self.draft.client_id = Some(client_id);
        self.revalidate();
    }

    pub fn set_delivery_date(&mut self, date: NaiveDate) {
        self.draft.delivery_date = Some(date);
        self.revalidate();
    }

    pub fn set_payment_date(&mut self, date: Option<NaiveDate>) {
        self.draft.payment_date = date;
        self.revalidate();
    }

    pub fn add_line(&mut self) {
        self.draft.add_line();
        self.revalidate();
    }

    pub fn remove_line(&mut self, index: usize) {
        self.draft.remove_line(index);
        self.revalidate();
    }

    /// Selects a product on a line, copying its catalog price into the unit
    /// price field. An id missing from the catalog clears the price.
    pub fn set_line_product(&mut self, index: usize, product_id: i32) {
        let catalog_price = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.price);
        self.draft
            .set_line_product(index, Some(product_id), catalog_price);
        self.revalidate();
    }

    pub fn set_line_quantity(&mut self, index: usize, raw: &str) {
        self.draft.set_line_quantity(index, raw);
        self.revalidate();
    }

    pub fn set_line_unit_price(&mut self, index: usize, raw: &str) {
        self.draft.set_line_unit_price(index, raw);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.draft);
    }

    /// Validates, runs the capacity gate and hands the assembled payload to
    /// the gateway.
    ///
    /// On success the notifier and both continuations fire, in that order.
    /// On any failure the draft stays untouched so the user can correct and
    /// retry; there is no automatic retry.
    pub async fn submit(
        &mut self,
        gateway: &dyn OrderGateway,
        notifier: &dyn Notifier,
        on_refresh: impl FnOnce(),
        on_return: impl FnOnce(),
    ) -> Result<()> {
        self.revalidate();
        if !self.errors.is_empty() {
            notifier.error("Error", "please fill in all required fields correctly");
            return Err(SubmitError::Validation(self.errors.clone()));
        }

        // Validation guarantees a delivery date at this point.
        if let Some(date) = self.draft.delivery_date {
            if let Err(exceeded) =
                capacity::admit(&self.sales, date, self.draft.incoming_quantity())
            {
                notifier.error("Error", &exceeded.to_string());
                return Err(SubmitError::Capacity(exceeded));
            }
        }

        let payload = OrderPayload::from_draft(&self.draft)?;
        match gateway.create_order(&payload).await {
            Ok(()) => {
                notifier.success("Order created", "the order was saved successfully");
                on_refresh();
                on_return();
                Ok(())
            }
            Err(e) => {
                error!("failed to save order: {e}");
                notifier.error("Error", "there was a problem saving the order");
                Err(SubmitError::Api(e))
            }
        }
    }
}
