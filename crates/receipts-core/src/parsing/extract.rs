use crate::model::{ExtractOptions, OrphanPolicy, SalesRecord};
use crate::parsing::lines::{classify, LineCursor, LineKind};
use crate::parsing::values::parse_price;
use crate::trace::{ParseEventKind, ParseTrace};
use rust_decimal::Decimal;

/// Item data read around an ItemNumber line, not yet attributed to a
/// customer. Owned by the extractor until flush moves it into a record.
#[derive(Debug, Clone)]
struct PendingItem {
    item_name: String,
    item_number: String,
    price: Option<Decimal>,
    date_sold: String,
}

/// The active customer/account pair items are grouped under.
#[derive(Debug, Clone)]
struct Context {
    customer_name: String,
    account_number: String,
}

/// Two-state walk: either still looking for the first customer/account pair,
/// or accumulating items under the current one.
enum State {
    Seeking { orphans: Vec<PendingItem> },
    Active { context: Context, buffer: Vec<PendingItem> },
}

/// Walk the deduplicated line sequence and emit one record per item,
/// attributed to the customer context in force when the item appeared.
///
/// Buffered items are flushed when the context changes and once more at end
/// of stream; a customer with no items yields no records. Malformed input
/// degrades to fewer records, never to an error.
pub fn extract_records(
    lines: &[String],
    opts: &ExtractOptions,
    trace: &mut ParseTrace,
) -> Vec<SalesRecord> {
    let cursor = LineCursor::new(lines);
    let mut records = Vec::new();
    let mut state = State::Seeking { orphans: Vec::new() };

    let mut i = 0;
    while i < cursor.len() {
        match classify(&cursor, i, opts) {
            LineKind::CustomerName => {
                let Some((customer, account)) = read_context(&cursor, i) else {
                    // The classifier only reports CustomerName when line i+1
                    // exists and is an account token.
                    debug_assert!(false, "customer at line {i} without account line");
                    i += 1;
                    continue;
                };

                state = begin_context(state, customer, account, i, &mut records, trace);
                // The account line was consumed together with the name.
                i += 2;
            }
            LineKind::ItemNumber => {
                match read_item(&cursor, i) {
                    Some(item) => buffer_item(&mut state, item, i, opts, trace),
                    None => trace.push(
                        i,
                        ParseEventKind::ItemDiscarded,
                        "truncated group: missing name, price, or date line",
                    ),
                }
                i += 1;
            }
            LineKind::AccountNumber | LineKind::Other => {
                i += 1;
            }
        }
    }

    // Final flush for whatever the last context accumulated.
    if let State::Active { context, buffer } = state {
        flush(&context, buffer, cursor.len(), &mut records, trace);
    }

    records
}

fn read_context(cursor: &LineCursor<'_>, i: usize) -> Option<(String, String)> {
    let customer = cursor.get(i)?;
    let account = cursor.get(i + 1)?;
    Some((customer.to_string(), account.to_string()))
}

/// Assemble a pending item from the three lines around an ItemNumber match:
/// name before, price and date after. Any missing neighbor discards the item.
fn read_item(cursor: &LineCursor<'_>, i: usize) -> Option<PendingItem> {
    let item_name = cursor.get_back(i, 1)?;
    let item_number = cursor.get(i)?.replace(',', "");
    let price_line = cursor.get(i + 1)?;
    let date_sold = cursor.get(i + 2)?;

    Some(PendingItem {
        item_name: item_name.to_string(),
        item_number,
        price: parse_price(price_line),
        date_sold: date_sold.to_string(),
    })
}

/// Flush the previous context's buffer (if any) and activate the new pair.
fn begin_context(
    state: State,
    customer_name: String,
    account_number: String,
    line: usize,
    records: &mut Vec<SalesRecord>,
    trace: &mut ParseTrace,
) -> State {
    let buffer = match state {
        State::Seeking { orphans } => orphans,
        State::Active { context, buffer } => {
            flush(&context, buffer, line, records, trace);
            Vec::new()
        }
    };

    trace.push(
        line,
        ParseEventKind::ContextStarted,
        format!("{customer_name} / {account_number}"),
    );

    State::Active {
        context: Context {
            customer_name,
            account_number,
        },
        buffer,
    }
}

fn buffer_item(
    state: &mut State,
    item: PendingItem,
    line: usize,
    opts: &ExtractOptions,
    trace: &mut ParseTrace,
) {
    match state {
        State::Active { buffer, .. } => {
            trace.push(line, ParseEventKind::ItemBuffered, item.item_number.clone());
            buffer.push(item);
        }
        State::Seeking { orphans } => match opts.orphan_policy {
            OrphanPolicy::Drop => trace.push(
                line,
                ParseEventKind::OrphanDropped,
                format!("{} before any customer", item.item_number),
            ),
            OrphanPolicy::AttachToNextCustomer => {
                trace.push(
                    line,
                    ParseEventKind::ItemBuffered,
                    format!("{} held for next customer", item.item_number),
                );
                orphans.push(item);
            }
        },
    }
}

/// Move every buffered item into an emitted record under `context`,
/// preserving append order.
fn flush(
    context: &Context,
    buffer: Vec<PendingItem>,
    line: usize,
    records: &mut Vec<SalesRecord>,
    trace: &mut ParseTrace,
) {
    if buffer.is_empty() {
        return;
    }
    trace.push(
        line,
        ParseEventKind::Flushed,
        format!("{} item(s) under {}", buffer.len(), context.customer_name),
    );
    for item in buffer {
        records.push(SalesRecord {
            customer_name: context.customer_name.clone(),
            account_number: context.account_number.clone(),
            item_name: item.item_name,
            item_number: item.item_number,
            price: item.price,
            date_sold: item.date_sold,
        });
    }
}
