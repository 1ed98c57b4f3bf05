// templates/pages/home.rs

use crate::domain::listing::Listing;
use crate::templates::{
    components::{listing_form, listing_item},
    desktop_layout,
};
use maud::{html, Markup, PreEscaped};

// Submits the form as JSON the way the API expects, then reloads so the
// fresh listing shows up in the server-rendered list.
const SUBMIT_SCRIPT: &str = r#"
document.getElementById('listing-form').addEventListener('submit', function (e) {
  e.preventDefault();
  var fields = e.target.elements;
  fetch('/api/listings', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({
      name: fields['name'].value,
      location: fields['location'].value,
      price: fields['price'].value,
      contact: fields['contact'].value
    })
  }).then(function (res) {
    if (res.ok) {
      window.location.reload();
    } else {
      res.json().then(function (data) { alert(data.error); });
    }
  });
});
"#;

pub fn home_page(listings: &[Listing]) -> Markup {
    desktop_layout(
        "PaLevel",
        html! {
            main {
                section {
                    h2 { "Find Your Room" }
                    @if listings.is_empty() {
                        p { "No listings yet. Be the first to add one!" }
                    } @else {
                        ul {
                            @for listing in listings {
                                (listing_item(listing))
                            }
                        }
                    }
                }

                section {
                    h2 { "Landlords: Add Your Property" }
                    (listing_form())
                }
            }

            script { (PreEscaped(SUBMIT_SCRIPT)) }
        },
    )
}
