use leptos::*;

use crate::api::types::AttendanceRecord;
use crate::utils::format::{format_date, format_time_of_day, format_working_hours};

/// Read-only history in the order the server returns it. Desktop gets a
/// table, small screens get stacked cards. Missing timestamps and hours
/// render as dashes.
#[component]
pub fn AttendanceHistory(records: Vec<AttendanceRecord>) -> impl IntoView {
    let cards = records.clone();
    view! {
        <div class="hidden md:block overflow-x-auto rounded-xl border border-gray-200 bg-white shadow-sm">
            <table class="w-full text-left">
                <thead class="bg-gray-50 text-gray-600 text-sm">
                    <tr>
                        <th class="p-4">"Date"</th>
                        <th class="p-4">"Check In"</th>
                        <th class="p-4">"Check Out"</th>
                        <th class="p-4">"Working Hours"</th>
                    </tr>
                </thead>
                <tbody>
                    {records
                        .into_iter()
                        .map(|record| view! { <AttendanceRow record/> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
        <div class="md:hidden space-y-4">
            {cards
                .into_iter()
                .map(|record| view! { <AttendanceCard record/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn AttendanceRow(record: AttendanceRecord) -> impl IntoView {
    view! {
        <tr class="border-t border-gray-100 hover:bg-gray-50 transition">
            <td class="p-4 font-medium text-gray-700">{format_date(&record.date)}</td>
            <td class="p-4 text-gray-600">{format_time_of_day(record.check_in_time.as_ref())}</td>
            <td class="p-4 text-gray-600">{format_time_of_day(record.check_out_time.as_ref())}</td>
            <td class="p-4 text-gray-700 font-medium">{format_working_hours(record.working_hours)}</td>
        </tr>
    }
}

#[component]
fn AttendanceCard(record: AttendanceRecord) -> impl IntoView {
    let field = |label: &'static str, value: String| {
        view! {
            <div class="flex justify-between mb-2 last:mb-0">
                <span class="text-sm text-gray-500">{label}</span>
                <span class="text-gray-700">{value}</span>
            </div>
        }
    };
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-4">
            {field("Date", format_date(&record.date))}
            {field("Check In", format_time_of_day(record.check_in_time.as_ref()))}
            {field("Check Out", format_time_of_day(record.check_out_time.as_ref()))}
            {field("Working Hours", format_working_hours(record.working_hours))}
        </div>
    }
}
