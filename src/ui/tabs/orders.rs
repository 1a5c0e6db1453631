//! Orders page

use tokio::sync::RwLock;

use super::{Resource, SummaryCard};
use crate::app::state::AppState;
use crate::data::{Dataset, ResourceKind};
use crate::models::{Order, OrderStatus};
use crate::table::{BadgeVariant, CellContent, Column};
use crate::ui::dialogs::details::DetailSection;
use crate::utils::format_currency;

pub type OrdersTab = super::resource::ResourcePage<Order>;

impl Resource for Order {
    const KIND: ResourceKind = ResourceKind::Orders;
    const TITLE: &'static str = "Orders";
    const NOUN: &'static str = "Order";
    const SEARCH_HINT: &'static str = "Search order number or customer...";
    const CATEGORY: &'static str = "Status";

    fn dataset(state: &AppState) -> &RwLock<Dataset<Self>> {
        &state.orders
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::plain("orderNumber", "Order Number").sortable().width(14),
            Column::plain("customer", "Customer").sortable(),
            Column::plain("date", "Date").sortable().width(11),
            Column::custom("total", "Total", |o: &Order| CellContent::plain(format_currency(o.total)))
                .sortable()
                .width(12),
            Column::custom("status", "Status", |o: &Order| o.status.badge())
                .sortable()
                .width(12),
            Column::custom("paymentStatus", "Payment", |o: &Order| o.payment_status.badge())
                .sortable()
                .width(10),
        ]
    }

    fn label(&self) -> String {
        self.order_number.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.order_number.as_str(), self.customer.as_str()]
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn categories(_rows: &[Self]) -> Vec<String> {
        OrderStatus::all().iter().map(|s| s.as_str().to_string()).collect()
    }

    fn detail_sections(&self) -> Vec<DetailSection> {
        let items = self.items.iter().fold(DetailSection::new("Items"), |section, item| {
            section.field(
                format!("{} × {}", item.name, item.quantity),
                format!("{} ({} each)", format_currency(item.subtotal()), format_currency(item.price)),
            )
        });
        let shipping = DetailSection::new("Shipping address").field("Address", self.shipping_address.to_string());
        vec![items, shipping]
    }

    fn summary_cards(rows: &[Self]) -> Vec<SummaryCard> {
        let count = |status: OrderStatus| rows.iter().filter(|o| o.status == status).count();
        vec![
            SummaryCard {
                title: "Total Orders",
                count: rows.len(),
                variant: BadgeVariant::Default,
            },
            SummaryCard {
                title: "Pending",
                count: count(OrderStatus::Pending),
                variant: BadgeVariant::Warning,
            },
            SummaryCard {
                title: "Processing",
                count: count(OrderStatus::Processing),
                variant: BadgeVariant::Info,
            },
            SummaryCard {
                title: "Completed",
                count: count(OrderStatus::Delivered),
                variant: BadgeVariant::Success,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use crate::table::TableView;

    #[test]
    fn total_is_formatted_but_sorted_numerically() {
        let orders = mock::orders();
        let mut view = TableView::new(Order::columns());
        view.request_sort("total");
        let ordered = view.ordered(&orders);
        assert!(ordered.windows(2).all(|w| w[0].total <= w[1].total));

        let total = &view.columns()[3];
        assert!(total.render(&orders[0]).text.starts_with('$'));
    }

    #[test]
    fn cards_cover_pending_processing_completed() {
        let orders = mock::orders();
        let cards = Order::summary_cards(&orders);
        let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Total Orders", "Pending", "Processing", "Completed"]);
        assert_eq!(cards[0].count, orders.len());
    }

    #[test]
    fn details_list_items_and_address() {
        let order = &mock::orders()[0];
        let sections = order.detail_sections();
        assert_eq!(sections[0].fields.len(), order.items.len());
        assert_eq!(sections[1].fields[0].1.text, order.shipping_address.to_string());
    }
}
