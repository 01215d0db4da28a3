use crate::builder::{DocxBuilder, EMU_PER_INCH};
use crate::Result;
use std::path::Path;

/// Embedded pictures are sized to 6.5 in, the usable width of a letter page
/// with 1 in margins.
const PICTURE_WIDTH_EMU: u64 = EMU_PER_INCH * 13 / 2;

/// Composes the cohesive Michigan itinerary document.
///
/// The content is fixed. If `images_dir` contains previously extracted
/// images named `img_01.png`/`img_02.png`, they are embedded in a closing
/// section; missing files are skipped silently.
pub fn build_itinerary(images_dir: &Path) -> Result<DocxBuilder> {
    let mut doc = DocxBuilder::new();

    doc.add_heading("Girls Trip to Michigan (Cohesive Itinerary)", 0);

    doc.add_heading("Trip overview", 1);
    doc.add_bullets(&[
        "Dates: Converge in Chicago on Aug 28\u{2013}29; road trip begins Aug 29",
        "Primary loop: Chicago \u{2192} Grand Rapids \u{2192} Ludington \u{2192} Sleeping Bear Dunes \u{2192} Traverse City \u{2192} Torch Lake \u{2192} Charlevoix \u{2192} Mackinac City / Mackinac Island \u{2192} Frankenmuth \u{2192} (Midland/Saginaw/Howell) \u{2192} (Sarnia/Windsor, Canada) \u{2192} Detroit \u{2192} Ann Arbor \u{2192} Kalamazoo \u{2192} Home",
    ]);

    doc.add_heading("Day-by-day plan", 1);

    doc.add_heading("Aug 28\u{2013}29 \u{2014} Arrivals + Chicago", 2);
    doc.add_bullets(&[
        "Converge in Chicago (Aug 28/29)",
        "Rental car pickup (PU): Aug 29 \u{2014} load up and leave by 2:00 PM (earlier preferred)",
        "Rental fee estimate: $570 (Costco/Budget); timing may change depending on arrivals",
    ]);

    doc.add_heading("Aug 29 \u{2014} Chicago \u{2192} Grand Rapids \u{2192} Ludington", 2);
    doc.add_bullets(&[
        "Grand Rapids (approx. 3 hr 18)",
        "Ludington (approx. 1 hr 45)",
    ]);
    doc.add_paragraph(
        "Note: Ludington is the port for the Badger Ferry (car ferry across Lake Michigan to Wisconsin).",
    );
    doc.add_bullets(&[
        "Climb lighthouse",
        "Pine Village",
        "Port Museum",
        "Kayak on the lake",
        "Overnight: Ludington possible (depends on departure time from Chicago)",
    ]);

    doc.add_heading(
        "Aug 30 \u{2014} Ludington \u{2192} Sleeping Bear Dunes \u{2192} Traverse City",
        2,
    );
    doc.add_paragraph("Sleeping Bear Dunes (approx. 2 hr)");
    doc.add_bullets(&[
        "Pass required: $25 per car",
        "Site pass: https://www.recreation.gov/sitepass/74294",
    ]);
    doc.add_paragraph("For a visit under ~3 hours:");
    doc.add_bullets(&[
        "Drive the 7-mile Pierce Stocking Scenic Drive",
        "Do the Dune Climb (or watch!)",
        "Explore Glen Haven and the Maritime Museum",
        "Dip toes in Loon Lake",
    ]);
    doc.add_paragraph("Traverse City (approx. 38 min)");
    doc.add_bullets(&[
        "Wineries / distilleries",
        "City trail",
        "Tour town",
        "Lighthouse",
        "Eat well",
        "Overnight: Traverse City suggested",
    ]);

    doc.add_heading(
        "Aug 31 \u{2014} Traverse City \u{2192} Torch Lake \u{2192} Charlevoix \u{2192} Mackinac City",
        2,
    );
    doc.add_paragraph("Torch Lake (approx. 40 min)");
    doc.add_bullets(&[
        "Drive around the lake; consider touring Alden",
        "Clear-bottom kayaks or a boat ride down the lake",
        "Petoskey stone search (see locations below)",
    ]);
    doc.add_paragraph("Petoskey stone search locations:");
    doc.add_bullets(&[
        "Bryant Park Beach \u{2014} 1097 Peninsula Dr, Traverse City, MI 49686",
        "Van\u{2019}s Beach \u{2014} 205 Cedar St, Leland, MI 49654",
        "Peterson Park \u{2014} 10001 E Peterson Park Rd, Northport, MI 49670",
        "Magnus Park \u{2014} 901 West Lake St, Petoskey, MI 49770",
        "Cross Village Beach \u{2014} 100 Park Ln, Harbor Springs, MI 49740",
    ]);
    doc.add_paragraph("Charlevoix (approx. 23 min)");
    doc.add_bullets(&["Lock", "Castle Farms", "Shop the town", "Lighthouse"]);
    doc.add_paragraph("Mackinac City (approx. 1 hr 10)");
    doc.add_bullets(&[
        "Base for Mackinac Island",
        "Overnight: Mackinac City (2 nights suggested)",
    ]);

    doc.add_heading("Sep 1\u{2013}2 \u{2014} Mackinac Island (day trips)", 2);
    doc.add_paragraph("Mackinac Island day plan");
    doc.add_bullets(&[
        "Target: 7:00 AM",
        "Park at the ferry dock OR call a shuttle if staying within ~1.5 miles of the ferry dock",
        "If driving to ferry: arrive 30 minutes prior to departure (7:30 AM)",
        "Costs: parking $10; ferry $52 per person round trip",
        "Ferry info: 1-800-638-9892",
        "On-island: ride bikes, tour town, eat well",
        "Return: around 4:00\u{2013}4:30 PM",
    ]);

    doc.add_heading(
        "Sep 3 \u{2014} Mackinac City \u{2192} Frankenmuth \u{2192} (Midland/Saginaw/Howell) \u{2192} (Sarnia, Canada)",
        2,
    );
    doc.add_paragraph("Frankenmuth (approx. 2 hr 50)");
    doc.add_bullets(&["Little Bavaria", "Cute / quaint", "Good food?"]);
    doc.add_paragraph("Midland / Saginaw / Howell (approx. 1 hr \u{2013} 1 hr 30)");
    doc.add_bullets(&[
        "Small livable towns",
        "Howell noted as \u{2018}best overall downtown\u{2019}!",
    ]);
    doc.add_paragraph("Optional: Sarnia, Canada (approx. 2 hr to border)");
    doc.add_bullets(&["Overnight: Sarnia optional"]);

    doc.add_heading("Sep 4 \u{2014} (Sarnia) \u{2192} Windsor, Canada \u{2192} Detroit", 2);
    doc.add_bullets(&["Optional: Windsor, Canada (approx. 2 hr to border)"]);
    doc.add_bullets(&[
        "Detroit: meet Julia downtown?",
        "Overnight: Julia\u{2019}s",
    ]);

    doc.add_heading("Sep 5 \u{2014} Detroit \u{2192} Ann Arbor \u{2192} Kalamazoo \u{2192} Home", 2);
    doc.add_bullets(&[
        "Ann Arbor (stop / explore)",
        "Kalamazoo (approx. 1 hr 46): good driving break",
        "Home (approx. 3 hr)",
    ]);

    doc.add_heading("Notables / logistics", 1);

    doc.add_heading("Canada driving (rental car)", 2);
    doc.add_bullets(&[
        "Vehicles may be driven into Canada with no restrictions.",
        "Notify the rental counter at pickup that you plan to drive into Canada so they can provide a Canadian Non-Resident Insurance Card.",
        "Download: www.avis.ca/content/dam/avis/na/ca/common/pdf-files/abg__canada_non_resident_card.pdf",
        "One additional driver fee may be waived for Costco members at participating locations.",
    ]);

    doc.add_heading("Booking", 2);
    doc.add_bullets(&[
        "Budget Confirmation Number: 38128110US6",
        "Booked pickup: Aug 28",
        "Return: Sep 7",
    ]);

    doc.add_heading("Rough cost estimate (per person, divided by 3)", 2);
    doc.add_bullets(&[
        "Hotels/Airbnbs: $200\u{2013}250/night, 8 nights \u{2192} ~$540 each",
        "Meals: $65/day \u{2192} ~$520 each",
        "Gas: $240 total \u{2192} ~$80 each",
        "Car rental: $570 total \u{2192} ~$190 each",
        "Ferry/parking/entry fees: ~$100 total \u{2192} ~$35 each",
        "Activities: kayaks/boat tours/misc (variable)",
        "Approx total: ~$1300 each (not including airfare)",
    ]);

    doc.add_heading("Images from the original DOCX", 1);
    doc.add_paragraph(
        "These images were extracted from the original \u{2018}Girls Trip to Michigan.docx\u{2019} and embedded here so they are explicitly accounted for.",
    );

    for idx in [1, 2] {
        let img = images_dir.join(format!("img_{:02}.png", idx));
        if img.exists() {
            doc.add_paragraph(&format!("Image {}", idx));
            doc.add_picture(&img, PICTURE_WIDTH_EMU)?;
        }
    }

    Ok(doc)
}
